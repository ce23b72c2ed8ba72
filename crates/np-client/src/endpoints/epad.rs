//! EPAD (Electricity Price Area Differential) auction endpoints
//!
//! Unlike the rest of the portal, EPAD resources encode the date or year in
//! the endpoint path and take no fixed query parameters.

use super::impl_endpoint_base;
use crate::transport::Transport;
use np_core::{merge_params, ExtraParams, QueryDate, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// EPAD auction result and bid curve endpoints
pub struct EpadEndpoints {
    transport: Arc<Transport>,
}

impl EpadEndpoints {
    /// Create a new EPAD endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get EPAD auction results for a date
    ///
    /// Issues `GET EpadData/results/{date}` with no query parameters beyond
    /// caller extras.
    #[instrument(skip(self, query_date, extra))]
    pub async fn results(
        &self,
        query_date: impl Into<QueryDate>,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let endpoint = format!("EpadData/results/{}", query_date.into());
        self.transport.get(&endpoint, &merge_params(Vec::new(), extra)).await
    }

    /// Get yearly EPAD auction results
    #[instrument(skip(self, extra), fields(year))]
    pub async fn yearly_results(&self, year: i32, extra: &ExtraParams) -> Result<Value> {
        let endpoint = format!("EpadData/years/results/{}", year);
        self.transport.get(&endpoint, &merge_params(Vec::new(), extra)).await
    }

    /// Get EPAD bid curves for a date
    #[instrument(skip(self, query_date, extra))]
    pub async fn bid_curves(
        &self,
        query_date: impl Into<QueryDate>,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let endpoint = format!("EpadData/bid-curves/{}", query_date.into());
        self.transport.get(&endpoint, &merge_params(Vec::new(), extra)).await
    }

    /// Get yearly EPAD bid curves
    ///
    /// The portal uses the singular `bid-curve` segment here, unlike the
    /// per-date variant.
    #[instrument(skip(self, extra), fields(year))]
    pub async fn yearly_bid_curves(&self, year: i32, extra: &ExtraParams) -> Result<Value> {
        let endpoint = format!("EpadData/years/bid-curve/{}", year);
        self.transport.get(&endpoint, &merge_params(Vec::new(), extra)).await
    }
}

impl_endpoint_base!(EpadEndpoints);
