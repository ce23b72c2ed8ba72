//! Auction data availability endpoints
//!
//! Availability responses drive everything else: they list which markets the
//! portal currently serves and feed [`crate::market::MarketConfig`]. Both
//! accessors have snapshot variants that persist the raw JSON to disk.

use super::impl_endpoint_base;
use crate::transport::Transport;
use np_core::{merge_params, ExtraParams, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

/// Default file name for a persisted availability response
pub const AVAILABILITY_SNAPSHOT: &str = "AuctionDataAvailability.json";

/// Default file name for a persisted latest-availability response
pub const LATEST_AVAILABILITY_SNAPSHOT: &str = "AuctionDataAvailabilityLatest.json";

/// Auction data availability endpoints
pub struct AuctionEndpoints {
    transport: Arc<Transport>,
}

impl AuctionEndpoints {
    /// Create a new auction endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get auction data availability for all markets
    ///
    /// The endpoint takes no fixed parameters; anything the caller needs
    /// goes through `extra`.
    #[instrument(skip(self, extra))]
    pub async fn data_availability(&self, extra: &ExtraParams) -> Result<Value> {
        let params = merge_params(Vec::new(), extra);
        self.transport.get("AuctionDataAvailability", &params).await
    }

    /// Get the latest auction data availability
    #[instrument(skip(self, extra))]
    pub async fn latest_data_availability(&self, extra: &ExtraParams) -> Result<Value> {
        let params = merge_params(Vec::new(), extra);
        self.transport.get("AuctionDataAvailability/GetLatest", &params).await
    }

    /// Get auction data availability and persist the raw JSON
    ///
    /// Writes the pretty-printed response to `path`, or to
    /// [`AVAILABILITY_SNAPSHOT`] in the working directory when `path` is
    /// `None`. The fetched value is returned either way; file I/O failures
    /// propagate as [`np_core::Error::Io`].
    pub async fn save_data_availability(
        &self,
        path: Option<&Path>,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let data = self.data_availability(extra).await?;
        write_snapshot(path.unwrap_or(Path::new(AVAILABILITY_SNAPSHOT)), &data)?;
        Ok(data)
    }

    /// Get the latest auction data availability and persist the raw JSON
    pub async fn save_latest_data_availability(
        &self,
        path: Option<&Path>,
        extra: &ExtraParams,
    ) -> Result<Value> {
        let data = self.latest_data_availability(extra).await?;
        write_snapshot(path.unwrap_or(Path::new(LATEST_AVAILABILITY_SNAPSHOT)), &data)?;
        Ok(data)
    }
}

fn write_snapshot(path: &Path, data: &Value) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(data)?)?;
    info!("Data saved to {}", path.display());
    Ok(())
}

impl_endpoint_base!(AuctionEndpoints);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_snapshot_pretty_prints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("availability.json");
        let data = json!([{"market": "DayAhead", "marketDisplayName": "Day-ahead"}]);

        write_snapshot(&path, &data).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&written).unwrap(), data);
        assert!(written.contains('\n'));
    }
}
