//! Market configuration derived from auction data availability
//!
//! The portal's availability response is a list of market objects. The only
//! part the client keeps is the market-code to display-name lookup, built
//! once and held immutably; refreshing it is an explicit
//! [`crate::NordPoolClient::fetch_market_config`] call, never implicit
//! construction-time I/O.

use serde_json::Value;
use std::collections::HashMap;

/// Immutable market-code to display-name lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    markets: HashMap<String, String>,
}

impl MarketConfig {
    /// Build the lookup from an `AuctionDataAvailability` response.
    ///
    /// Entries without a `market` field are keyed as `"Unknown"`; a missing
    /// display name becomes the empty string. A non-array response yields an
    /// empty config.
    pub fn from_availability(availability: &Value) -> Self {
        let mut markets = HashMap::new();

        if let Some(entries) = availability.as_array() {
            for entry in entries {
                let market =
                    entry.get("market").and_then(Value::as_str).unwrap_or("Unknown").to_string();
                let display_name = entry
                    .get("marketDisplayName")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string();
                markets.insert(market, display_name);
            }
        }

        Self { markets }
    }

    /// Look up the display name for a market code
    pub fn display_name(&self, market: &str) -> Option<&str> {
        self.markets.get(market).map(String::as_str)
    }

    /// Iterate over all known (market code, display name) pairs
    pub fn markets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.markets.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of known markets
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    /// Whether the availability response contained no markets
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_availability() {
        let availability = json!([
            {"market": "DayAhead", "marketDisplayName": "Nord Pool Day-ahead"},
            {"market": "N2EX_DayAhead", "marketDisplayName": "N2EX Day-ahead"},
        ]);

        let config = MarketConfig::from_availability(&availability);

        assert_eq!(config.len(), 2);
        assert_eq!(config.display_name("DayAhead"), Some("Nord Pool Day-ahead"));
        assert_eq!(config.display_name("N2EX_DayAhead"), Some("N2EX Day-ahead"));
        assert_eq!(config.display_name("IDA1"), None);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let availability = json!([
            {"marketDisplayName": "Orphaned"},
            {"market": "IDA1"},
        ]);

        let config = MarketConfig::from_availability(&availability);

        assert_eq!(config.display_name("Unknown"), Some("Orphaned"));
        assert_eq!(config.display_name("IDA1"), Some(""));
    }

    #[test]
    fn test_non_array_response_is_empty() {
        let config = MarketConfig::from_availability(&json!({"error": "unexpected"}));
        assert!(config.is_empty());
    }
}
