//! Day-ahead market endpoints
//!
//! This module covers the day-ahead auction resources:
//! - Area prices and single-area price history
//! - Yearly and annual price aggregates
//! - The system price
//! - Traded volumes, capacities and flows
//! - Flow-based constraints and aggregated bid curves
//!
//! Every accessor assembles its fixed parameter set, merges caller extras
//! (extras override same-named fixed parameters) and returns the JSON body
//! unmodified.

use super::impl_endpoint_base;
use crate::transport::Transport;
use np_core::{join_codes, merge_params, ExtraParams, QueryDate, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Day-ahead market endpoints
pub struct DayAheadEndpoints {
    transport: Arc<Transport>,
}

impl DayAheadEndpoints {
    /// Create a new day-ahead endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get day-ahead prices for one or more delivery areas
    ///
    /// # Arguments
    ///
    /// * `query_date` - Delivery date, `YYYY-MM-DD` string or `NaiveDate`
    /// * `delivery_areas` - Delivery area codes, e.g. `["NO2", "SE3"]`
    /// * `currency` - 3-letter currency code, typically [`np_core::DEFAULT_CURRENCY`]
    /// * `market` - Market code, typically [`np_core::DEFAULT_MARKET`]
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use np_client::NordPoolClient;
    /// # use np_core::{Config, ExtraParams};
    /// # async fn run() -> np_core::Result<()> {
    /// # let client = NordPoolClient::new(Config::default())?;
    /// let prices = client
    ///     .day_ahead()
    ///     .prices("2025-03-02", &["NO2"], "EUR", "N2EX_DayAhead", &ExtraParams::new())
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, query_date, extra), fields(delivery_areas = ?delivery_areas))]
    pub async fn prices(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_areas: &[&str],
        currency: &str,
        market: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("market".to_string(), market.to_string()),
            ("deliveryArea".to_string(), join_codes(delivery_areas)),
            ("currency".to_string(), currency.to_string()),
        ];
        self.transport.get("DayAheadPrices", &merge_params(fixed, extra)).await
    }

    /// Get price history for a single delivery area
    #[instrument(skip(self, query_date, extra), fields(delivery_area))]
    pub async fn single_area_price_history(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_area: &str,
        currency: &str,
        market: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("market".to_string(), market.to_string()),
            ("deliveryArea".to_string(), delivery_area.to_string()),
            ("currency".to_string(), currency.to_string()),
        ];
        self.transport.get("DayAheadPrices/singleAreaHistory", &merge_params(fixed, extra)).await
    }

    /// Get aggregated prices for a year
    #[instrument(skip(self, extra), fields(year, delivery_areas = ?delivery_areas))]
    pub async fn aggregate_prices(
        &self,
        year: i32,
        delivery_areas: &[&str],
        currency: &str,
        market: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("year".to_string(), year.to_string()),
            ("market".to_string(), market.to_string()),
            ("deliveryArea".to_string(), join_codes(delivery_areas)),
            ("currency".to_string(), currency.to_string()),
        ];
        self.transport.get("AggregatePrices", &merge_params(fixed, extra)).await
    }

    /// Get annual aggregated prices across all available years
    #[instrument(skip(self, extra), fields(delivery_areas = ?delivery_areas))]
    pub async fn annual_aggregate_prices(
        &self,
        delivery_areas: &[&str],
        currency: &str,
        market: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("market".to_string(), market.to_string()),
            ("deliveryArea".to_string(), join_codes(delivery_areas)),
            ("currency".to_string(), currency.to_string()),
        ];
        self.transport.get("AggregatePrices/GetAnnuals", &merge_params(fixed, extra)).await
    }

    /// Get the system price for a date
    #[instrument(skip(self, query_date, extra), fields(currency))]
    pub async fn system_price(
        &self,
        query_date: impl Into<QueryDate>,
        currency: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("currency".to_string(), currency.to_string()),
        ];
        self.transport.get("DayAheadSystem", &merge_params(fixed, extra)).await
    }

    /// Get day-ahead traded volumes for one or more delivery areas
    ///
    /// Note the parameter name: this endpoint takes the plural
    /// `deliveryAreas`, unlike the price endpoints.
    #[instrument(skip(self, query_date, extra), fields(delivery_areas = ?delivery_areas))]
    pub async fn volumes(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_areas: &[&str],
        market: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("market".to_string(), market.to_string()),
            ("deliveryAreas".to_string(), join_codes(delivery_areas)),
        ];
        self.transport.get("DayAheadVolumes/multiple", &merge_params(fixed, extra)).await
    }

    /// Get day-ahead capacities for a delivery area
    #[instrument(skip(self, query_date, extra), fields(delivery_area))]
    pub async fn capacities(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_area: &str,
        market: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("market".to_string(), market.to_string()),
            ("deliveryArea".to_string(), delivery_area.to_string()),
        ];
        self.transport.get("DayAheadCapacities", &merge_params(fixed, extra)).await
    }

    /// Get day-ahead flow for a delivery area
    #[instrument(skip(self, query_date, extra), fields(delivery_area))]
    pub async fn flow(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_area: &str,
        market: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("market".to_string(), market.to_string()),
            ("deliveryArea".to_string(), delivery_area.to_string()),
        ];
        self.transport.get("DayAheadFlow", &merge_params(fixed, extra)).await
    }

    /// Get scheduled physical flows for a delivery area
    #[instrument(skip(self, query_date, extra), fields(delivery_area))]
    pub async fn scheduled_physical_flows(
        &self,
        query_date: impl Into<QueryDate>,
        delivery_area: &str,
        market: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("market".to_string(), market.to_string()),
            ("deliveryArea".to_string(), delivery_area.to_string()),
        ];
        self.transport.get("DayAheadFlow/scheduledPhysicalFlows", &merge_params(fixed, extra)).await
    }

    /// Get flow-based constraints for a flow-based domain
    #[instrument(skip(self, query_date, extra), fields(flow_based_domain))]
    pub async fn flow_based_constraints(
        &self,
        query_date: impl Into<QueryDate>,
        flow_based_domain: &str,
        market: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("market".to_string(), market.to_string()),
            ("flowBasedDomain".to_string(), flow_based_domain.to_string()),
        ];
        self.transport.get("AuctionFlowConstraints", &merge_params(fixed, extra)).await
    }

    /// Get aggregated bid curves for an auction
    ///
    /// # Arguments
    ///
    /// * `market_code` - Auction market code, e.g. "NPSDA", "IDA2"
    /// * `cluster_name` - Bidding cluster, e.g. "BALTIC", "NO"
    #[instrument(skip(self, query_date, extra), fields(market_code, cluster_name))]
    pub async fn aggregated_bid_curves(
        &self,
        query_date: impl Into<QueryDate>,
        market_code: &str,
        cluster_name: &str,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let fixed = vec![
            ("date".to_string(), query_date.into().to_string()),
            ("marketCode".to_string(), market_code.to_string()),
            ("clusterName".to_string(), cluster_name.to_string()),
        ];
        self.transport.get("AggregatedBidCurves", &merge_params(fixed, extra)).await
    }
}

impl_endpoint_base!(DayAheadEndpoints);
