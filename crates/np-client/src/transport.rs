//! HTTP transport layer for Nord Pool Data Portal requests

use np_core::{Config, Error, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// HTTP transport layer for making requests to the data portal
pub struct Transport {
    client: Client,
    base_url: String,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url: config.base_url.clone() })
    }

    /// Make a GET request to the data portal
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Endpoint path relative to the base URL, e.g. `DayAheadPrices`
    /// * `params` - Query parameters, already merged and ordered
    ///
    /// # Returns
    ///
    /// The decoded JSON body exactly as the server sent it. A non-2xx status
    /// yields [`Error::Http`], a non-JSON body yields [`Error::Decode`]; no
    /// retries are attempted.
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    pub async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        let url = self.build_url(endpoint, params)?;
        debug!("Making request to: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            error!("Request to {} failed with status: {}", url, status);
            return Err(Error::Http { status: status.as_u16(), endpoint: url.to_string() });
        }
        debug!("Request successful with status: {}", status);

        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?;
        debug!("Response body length: {} bytes", text.len());

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse JSON response: {}", e);
            Error::Decode { endpoint: url.to_string(), message: e.to_string() }
        })
    }

    /// Build the full URL for an API request
    fn build_url(&self, endpoint: &str, params: &[(String, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, endpoint))
            .map_err(|e| Error::Transport(format!("Invalid URL for {}: {}", endpoint, e)))?;

        if !params.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport").field("base_url", &self.base_url).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_transport() -> Transport {
        Transport::new(&Config::with_base_url("https://mock.nordpoolgroup.com/api")).unwrap()
    }

    #[test]
    fn test_build_url() {
        let transport = mock_transport();
        let params = vec![
            ("date".to_string(), "2025-03-02".to_string()),
            ("deliveryArea".to_string(), "NO2".to_string()),
        ];

        let url = transport.build_url("DayAheadPrices", &params).unwrap();

        assert_eq!(
            url.as_str(),
            "https://mock.nordpoolgroup.com/api/DayAheadPrices?date=2025-03-02&deliveryArea=NO2"
        );
    }

    #[test]
    fn test_build_url_without_params() {
        let transport = mock_transport();
        let url = transport.build_url("EpadData/results/2025-01-01", &[]).unwrap();

        assert_eq!(url.as_str(), "https://mock.nordpoolgroup.com/api/EpadData/results/2025-01-01");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_build_url_encodes_values() {
        let transport = mock_transport();
        let params = vec![("clusterName".to_string(), "NO 1".to_string())];

        let url = transport.build_url("AggregatedBidCurves", &params).unwrap();
        assert!(url.as_str().contains("clusterName=NO+1"));
    }
}
