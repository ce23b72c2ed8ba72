//! Configuration management for the Nord Pool Data Portal client

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use dotenvy::dotenv;

/// Main configuration struct for the Nord Pool client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL for the Nord Pool Data Portal API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// User agent sent with every request
  pub user_agent: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {

    dotenv().ok();

    let base_url =
      env::var("NORDPOOL_BASE_URL").unwrap_or_else(|_| crate::NORDPOOL_BASE_URL.to_string());

    let timeout_secs = env::var("NORDPOOL_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid NORDPOOL_TIMEOUT_SECS".to_string()))?;

    let user_agent =
      env::var("NORDPOOL_USER_AGENT").unwrap_or_else(|_| crate::DEFAULT_USER_AGENT.to_string());

    Ok(Config { base_url, timeout_secs, user_agent })
  }

  /// Create a config pointing at a custom base URL (mock servers in tests)
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Config { base_url: base_url.into(), ..Config::default() }
  }
}

impl Default for Config {
  fn default() -> Self {
    Config {
      base_url: crate::NORDPOOL_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      user_agent: crate::DEFAULT_USER_AGENT.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.base_url, crate::NORDPOOL_BASE_URL);
    assert_eq!(config.timeout_secs, 30);
  }

  #[test]
  fn test_config_with_base_url() {
    let config = Config::with_base_url("http://localhost:9090/api");
    assert_eq!(config.base_url, "http://localhost:9090/api");
    assert_eq!(config.timeout_secs, crate::DEFAULT_TIMEOUT_SECS);
  }
}
