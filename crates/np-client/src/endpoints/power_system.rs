//! Power system data endpoints
//!
//! This module covers the physical side of the market:
//! - Manual frequency restoration reserve (mFRR)
//! - Consumption and consumption forecasts
//! - Production
//! - Physical flows
//!
//! The consumption endpoints always emit a `locations` parameter; an empty
//! location list is sent as the empty string, matching the portal's
//! expectations.

use super::impl_endpoint_base;
use crate::transport::Transport;
use np_core::{join_codes, merge_params, ExtraParams, QueryDate, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Power system data endpoints
pub struct PowerSystemEndpoints {
    transport: Arc<Transport>,
}

impl PowerSystemEndpoints {
    /// Create a new power system endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get manual frequency restoration reserve (mFRR) data
    #[instrument(skip(self, query_date, extra), fields(delivery_areas = ?delivery_areas))]
    pub async fn manual_frequency_restoration_reserve(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_areas: &[&str],
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("deliveryAreas".to_string(), join_codes(delivery_areas)),
        ];
        self
            .transport
            .get("ManualFrequencyRestorationReserve/multiple", &merge_params(fixed, extra))
            .await
    }

    /// Get consumption data
    ///
    /// # Arguments
    ///
    /// * `delivery_areas` - Delivery area codes
    /// * `locations` - Specific metering locations; pass `&[]` for all
    #[instrument(skip(self, query_date, extra), fields(delivery_areas = ?delivery_areas))]
    pub async fn consumption(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_areas: &[&str],
        locations: &[&str],
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("deliveryAreas".to_string(), join_codes(delivery_areas)),
            ("locations".to_string(), join_codes(locations)),
        ];
        self.transport.get("Consumption", &merge_params(fixed, extra)).await
    }

    /// Get consumption forecast data
    #[instrument(skip(self, query_date, extra), fields(delivery_areas = ?delivery_areas))]
    pub async fn consumption_forecast(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_areas: &[&str],
        locations: &[&str],
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("deliveryAreas".to_string(), join_codes(delivery_areas)),
            ("locations".to_string(), join_codes(locations)),
        ];
        self.transport.get("ConsumptionPrognoses", &merge_params(fixed, extra)).await
    }

    /// Get production data
    ///
    /// `location` may be empty to cover the whole delivery area.
    #[instrument(skip(self, query_date, extra), fields(delivery_area, location))]
    pub async fn production(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_area: &str,
        location: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("deliveryArea".to_string(), delivery_area.to_string()),
            ("location".to_string(), location.to_string()),
        ];
        self.transport.get("ProductionData", &merge_params(fixed, extra)).await
    }

    /// Get physical flows for a delivery area
    #[instrument(skip(self, query_date, extra), fields(delivery_area))]
    pub async fn physical_flows(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_area: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("deliveryArea".to_string(), delivery_area.to_string()),
        ];
        self.transport.get("PhysicalFlows", &merge_params(fixed, extra)).await
    }
}

impl_endpoint_base!(PowerSystemEndpoints);
