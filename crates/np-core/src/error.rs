use thiserror::Error;

/// The main error type for np-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Non-success HTTP status from the data portal
  #[error("HTTP error {status} for {endpoint}")]
  Http {
    /// Status code returned by the server
    status: u16,
    /// Full URL of the failed request
    endpoint: String,
  },

  /// Connection or request-level transport failure
  #[error("Transport error: {0}")]
  Transport(String),

  /// Response body was not valid JSON
  #[error("Failed to decode response from {endpoint}: {message}")]
  Decode {
    /// Full URL of the request whose body failed to decode
    endpoint: String,
    /// Underlying decode failure
    message: String,
  },

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error")]
  ParseDate(#[from] chrono::ParseError),

  /// File I/O error when persisting response snapshots
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

/// Result type alias for np-* crates
pub type Result<T> = std::result::Result<T, Error>;
