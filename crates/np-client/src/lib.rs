//! # np-client
//!
//! A pure Nord Pool Data Portal API client for Rust with no database
//! dependencies.
//!
//! ## Features
//!
//! - **Clean API**: Simple, idiomatic Rust interface
//! - **Async/Await**: Built on tokio and reqwest
//! - **Pass-through**: Responses are returned as `serde_json::Value`,
//!   exactly as the portal sent them
//! - **Configurable**: Environment-based configuration via np-core
//! - **Comprehensive**: Covers auction, day-ahead, EPAD, intraday and
//!   power system resources
//!
//! ## Usage
//!
//! ```rust,no_run
//! use np_client::NordPoolClient;
//! use np_core::{Config, ExtraParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NordPoolClient::new(Config::from_env()?)?;
//!
//!     // Day-ahead prices for southern Norway
//!     let prices = client
//!         .day_ahead()
//!         .prices("2025-03-02", &["NO2"], "EUR", "DayAhead", &ExtraParams::new())
//!         .await?;
//!     println!("{prices:#}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Extra parameters
//!
//! Every accessor takes a trailing [`np_core::ExtraParams`] map. Extras are
//! merged into the accessor's fixed parameter set and override a fixed
//! parameter of the same name, mirroring the portal's permissive query
//! surface.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, np_core::Error>`. A non-2xx status maps to
//! [`np_core::Error::Http`] with the status code and URL, a non-JSON body
//! to [`np_core::Error::Decode`]; nothing is retried.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod market;
pub mod transport;

// Re-export the main client and common types
pub use client::NordPoolClient;
pub use market::MarketConfig;
pub use np_core::{Config, Error, ExtraParams, ParamValue, QueryDate, Result};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
    auction::AuctionEndpoints, day_ahead::DayAheadEndpoints, epad::EpadEndpoints,
    intraday::IntradayEndpoints, power_system::PowerSystemEndpoints,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_portal() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://dataportal-api.nordpoolgroup.com/api");
    }
}
