//! # Parameter Parsing
//!
//! Strict parsing of path and query values. Any failure is a 400 carrying
//! the caller's message.

use std::collections::HashMap;
use std::str::FromStr;

use super::errors::{ApiError, ApiResult};

/// Parse `raw` as `T` or fail with `msg`
pub fn parse_number<T: FromStr>(raw: &str, msg: &str) -> ApiResult<T> {
    raw.parse::<T>().map_err(|_| ApiError::bad_request(msg))
}

/// Parse a query value, treating a missing key like an empty value
pub fn query_number<T: FromStr>(
    query: &HashMap<String, String>,
    key: &str,
    msg: &str,
) -> ApiResult<T> {
    parse_number(query.get(key).map(String::as_str).unwrap_or(""), msg)
}

/// Parse a `"<min>-<max>"` range.
///
/// The value must split on `-` into exactly two floats, so negative bounds
/// are not expressible.
pub fn parse_range(raw: &str, msg: &str) -> ApiResult<(f64, f64)> {
    let parts: Vec<&str> = raw.split('-').collect();
    match parts.as_slice() {
        [min, max] => Ok((parse_number(min, msg)?, parse_number(max, msg)?)),
        _ => Err(ApiError::bad_request(msg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1.5-2", "invalid height").unwrap(), (1.5, 2.0));
    }

    #[test]
    fn test_malformed_ranges() {
        for raw in ["10", "10-20-30", "", "-", "a-2", "1-b", "-1-2"] {
            let err = parse_range(raw, "invalid width").unwrap_err();
            assert_eq!(err.to_string(), "invalid width", "input {:?}", raw);
        }
    }

    #[test]
    fn test_missing_query_value() {
        let query = HashMap::from([("max".to_string(), "3000".to_string())]);

        assert!(query_number::<f64>(&query, "min", "invalid min weight").is_err());
        assert_eq!(
            query_number::<f64>(&query, "max", "invalid max weight").unwrap(),
            3000.0
        );
    }

    #[test]
    fn test_strict_integers() {
        assert_eq!(parse_number::<i32>("2020", "invalid year").unwrap(), 2020);
        assert!(parse_number::<i32>("2020.5", "invalid year").is_err());
        assert!(parse_number::<i32>(" 2020", "invalid year").is_err());
    }
}
