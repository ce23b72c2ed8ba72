pub mod config;
pub mod error;
pub mod params;

pub use config::Config;
pub use error::{Error, Result};
pub use params::{merge_params, join_codes, ExtraParams, ParamValue, QueryDate};

/// Base URL for the Nord Pool Data Portal API
pub const NORDPOOL_BASE_URL: &str = "https://dataportal-api.nordpoolgroup.com/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "np-client/0.1.0";

/// Currency used when callers have no preference
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Market code used when callers have no preference
pub const DEFAULT_MARKET: &str = "DayAhead";
