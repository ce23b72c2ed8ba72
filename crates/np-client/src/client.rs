//! Client facade wiring the endpoint modules to a shared transport

use crate::endpoints::{
  auction::AuctionEndpoints, day_ahead::DayAheadEndpoints, epad::EpadEndpoints,
  intraday::IntradayEndpoints, power_system::PowerSystemEndpoints,
};
use crate::market::MarketConfig;
use crate::transport::Transport;
use np_core::{Config, ExtraParams, Result};
use std::sync::Arc;

/// Main Nord Pool Data Portal API client
///
/// Provides access to all data portal endpoints through organized endpoint
/// modules sharing one connection pool. Construction performs no network
/// I/O; the market-configuration lookup is an explicit
/// [`fetch_market_config`](NordPoolClient::fetch_market_config) call.
///
/// # Examples
///
/// ```rust,no_run
/// use np_client::NordPoolClient;
/// use np_core::{Config, ExtraParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = NordPoolClient::new(Config::from_env()?)?;
///
///     let prices = client
///         .day_ahead()
///         .prices("2025-03-02", &["NO2"], "EUR", "DayAhead", &ExtraParams::new())
///         .await?;
///     println!("{prices:#}");
///
///     let markets = client.fetch_market_config().await?;
///     println!("Portal serves {} markets", markets.len());
///
///     Ok(())
/// }
/// ```
pub struct NordPoolClient {
  transport: Arc<Transport>,
}

impl NordPoolClient {
  /// Create a new Nord Pool API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created. No request is
  /// sent; an unreachable portal surfaces on the first accessor call.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Get access to auction data availability endpoints
  pub fn auction(&self) -> AuctionEndpoints {
    AuctionEndpoints::new(self.transport.clone())
  }

  /// Get access to day-ahead market endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let system_price = client.day_ahead().system_price("2025-03-02", "EUR", &extra).await?;
  /// let volumes = client.day_ahead().volumes("2025-03-02", &["NO1", "NO2"], "DayAhead", &extra).await?;
  /// ```
  pub fn day_ahead(&self) -> DayAheadEndpoints {
    DayAheadEndpoints::new(self.transport.clone())
  }

  /// Get access to EPAD auction endpoints
  pub fn epad(&self) -> EpadEndpoints {
    EpadEndpoints::new(self.transport.clone())
  }

  /// Get access to intraday market statistics endpoints
  pub fn intraday(&self) -> IntradayEndpoints {
    IntradayEndpoints::new(self.transport.clone())
  }

  /// Get access to power system data endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let mfrr = client
  ///   .power_system()
  ///   .manual_frequency_restoration_reserve("2025-03-02", &["NO2"], &extra)
  ///   .await?;
  /// ```
  pub fn power_system(&self) -> PowerSystemEndpoints {
    PowerSystemEndpoints::new(self.transport.clone())
  }

  /// Fetch auction data availability and derive the market lookup
  ///
  /// This is the explicit initialization step for callers that need the
  /// market-code to display-name mapping. The result is immutable; call
  /// again to refresh.
  ///
  /// # Errors
  ///
  /// Propagates any transport, HTTP or decode error from the availability
  /// request.
  pub async fn fetch_market_config(&self) -> Result<MarketConfig> {
    let availability = self.auction().data_availability(&ExtraParams::new()).await?;
    Ok(MarketConfig::from_availability(&availability))
  }
}

impl std::fmt::Debug for NordPoolClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("NordPoolClient").field("transport", &self.transport).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::EndpointBase;

  #[test]
  fn test_client_creation() {
    let config = Config::default();
    let client = NordPoolClient::new(config).expect("Failed to create client");

    assert_eq!(client.auction().transport().base_url(), np_core::NORDPOOL_BASE_URL);
  }

  #[test]
  fn test_endpoint_modules_share_transport() {
    let client = NordPoolClient::new(Config::default()).unwrap();
    assert!(Arc::ptr_eq(client.day_ahead().transport(), client.epad().transport()));
  }
}
