//! Query-parameter primitives shared by every accessor method
//!
//! The data portal takes plain query strings, so everything here bottoms out
//! in `(String, String)` pairs. Caller-supplied extras are modelled as an
//! explicit map and always win over the fixed parameter set of an accessor.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// A query parameter value, either textual or numeric
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
  /// Textual value, passed through verbatim
  Text(String),
  /// Numeric value, formatted in decimal
  Int(i64),
}

impl fmt::Display for ParamValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParamValue::Text(s) => write!(f, "{s}"),
      ParamValue::Int(n) => write!(f, "{n}"),
    }
  }
}

impl From<&str> for ParamValue {
  fn from(value: &str) -> Self {
    ParamValue::Text(value.to_string())
  }
}

impl From<String> for ParamValue {
  fn from(value: String) -> Self {
    ParamValue::Text(value)
  }
}

impl From<i64> for ParamValue {
  fn from(value: i64) -> Self {
    ParamValue::Int(value)
  }
}

impl From<i32> for ParamValue {
  fn from(value: i32) -> Self {
    ParamValue::Int(value as i64)
  }
}

impl From<u32> for ParamValue {
  fn from(value: u32) -> Self {
    ParamValue::Int(value as i64)
  }
}

/// Caller-supplied extra query parameters, merged into the fixed set
pub type ExtraParams = HashMap<String, ParamValue>;

/// Merge caller extras into an accessor's fixed parameter set.
///
/// An extra with the same name as a fixed parameter replaces it; remaining
/// extras are appended in sorted key order so the resulting URL is
/// deterministic.
pub fn merge_params(fixed: Vec<(String, String)>, extra: &ExtraParams) -> Vec<(String, String)> {
  let mut merged: Vec<(String, String)> = fixed
    .into_iter()
    .map(|(key, value)| match extra.get(&key) {
      Some(replacement) => (key, replacement.to_string()),
      None => (key, value),
    })
    .collect();

  let mut remaining: Vec<&String> =
    extra.keys().filter(|key| !merged.iter().any(|(k, _)| k == *key)).collect();
  remaining.sort();

  for key in remaining {
    merged.push((key.clone(), extra[key].to_string()));
  }

  merged
}

/// Join delivery area or location codes into the comma-separated form the
/// API expects. An empty slice yields the empty string.
pub fn join_codes(codes: &[&str]) -> String {
  codes.join(",")
}

/// A query date, either preformatted or a calendar date.
///
/// Accessors accept `impl Into<QueryDate>` so callers can pass a
/// `chrono::NaiveDate` or an already-formatted `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryDate {
  /// Preformatted ISO-8601 date string
  Iso(String),
  /// Calendar date, formatted on emission
  Date(NaiveDate),
}

impl fmt::Display for QueryDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      QueryDate::Iso(s) => write!(f, "{s}"),
      QueryDate::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
    }
  }
}

impl From<&str> for QueryDate {
  fn from(value: &str) -> Self {
    QueryDate::Iso(value.to_string())
  }
}

impl From<String> for QueryDate {
  fn from(value: String) -> Self {
    QueryDate::Iso(value)
  }
}

impl From<NaiveDate> for QueryDate {
  fn from(value: NaiveDate) -> Self {
    QueryDate::Date(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fixed() -> Vec<(String, String)> {
    vec![
      ("date".to_string(), "2025-03-02".to_string()),
      ("currency".to_string(), "EUR".to_string()),
    ]
  }

  #[test]
  fn test_merge_without_extras() {
    let merged = merge_params(fixed(), &ExtraParams::new());
    assert_eq!(merged, fixed());
  }

  #[test]
  fn test_extras_override_fixed() {
    let mut extra = ExtraParams::new();
    extra.insert("currency".to_string(), ParamValue::from("NOK"));

    let merged = merge_params(fixed(), &extra);
    assert_eq!(merged[1], ("currency".to_string(), "NOK".to_string()));
    assert_eq!(merged.len(), 2);
  }

  #[test]
  fn test_extras_appended_sorted() {
    let mut extra = ExtraParams::new();
    extra.insert("resolution".to_string(), ParamValue::from(60));
    extra.insert("filter".to_string(), ParamValue::from("peak"));

    let merged = merge_params(fixed(), &extra);
    assert_eq!(merged[2], ("filter".to_string(), "peak".to_string()));
    assert_eq!(merged[3], ("resolution".to_string(), "60".to_string()));
  }

  #[test]
  fn test_join_codes() {
    assert_eq!(join_codes(&["NO1", "NO2", "SE3"]), "NO1,NO2,SE3");
    assert_eq!(join_codes(&["NO2"]), "NO2");
    assert_eq!(join_codes(&[]), "");
  }

  #[test]
  fn test_query_date_from_naive_date() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    assert_eq!(QueryDate::from(date).to_string(), "2025-03-02");
  }

  #[test]
  fn test_query_date_from_str_passthrough() {
    assert_eq!(QueryDate::from("2025-03-02").to_string(), "2025-03-02");
  }

  #[test]
  fn test_param_value_display() {
    assert_eq!(ParamValue::from("NPSDA").to_string(), "NPSDA");
    assert_eq!(ParamValue::from(2024).to_string(), "2024");
  }
}
