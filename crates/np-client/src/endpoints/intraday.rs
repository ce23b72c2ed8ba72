//! Intraday market statistics endpoints

use super::impl_endpoint_base;
use crate::transport::Transport;
use np_core::{merge_params, ExtraParams, QueryDate, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Intraday market statistics endpoints
pub struct IntradayEndpoints {
    transport: Arc<Transport>,
}

impl IntradayEndpoints {
    /// Create a new intraday endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get intraday market statistics for a delivery area
    #[instrument(skip(self, query_date, extra), fields(delivery_area))]
    pub async fn market_statistics(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_area: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("deliveryArea".to_string(), delivery_area.to_string()),
        ];
        self.transport.get("IntradayMarketStatistics", &merge_params(fixed, extra)).await
    }

    /// Get hourly intraday market statistics for a delivery area
    #[instrument(skip(self, query_date, extra), fields(delivery_area))]
    pub async fn hourly_statistics(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_area: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("deliveryArea".to_string(), delivery_area.to_string()),
        ];
        self.transport.get("IntradayMarketStatistics/hourly", &merge_params(fixed, extra)).await
    }
}

impl_endpoint_base!(IntradayEndpoints);
