//! Endpoint modules, grouped the way the data portal groups its resources

pub mod auction;
pub mod day_ahead;
pub mod epad;
pub mod intraday;
pub mod power_system;

use crate::transport::Transport;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl crate::endpoints::EndpointBase for $struct_name {
      fn transport(&self) -> &std::sync::Arc<crate::transport::Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

#[cfg(test)]
mod tests {
  use super::*;
  use np_core::Config;

  #[test]
  fn test_endpoint_base_exposes_transport() {
    let transport =
      Arc::new(Transport::new(&Config::with_base_url("https://mock.nordpoolgroup.com/api")).unwrap());
    let endpoints = auction::AuctionEndpoints::new(transport);

    assert_eq!(endpoints.transport().base_url(), "https://mock.nordpoolgroup.com/api");
  }
}
