//! Query parameter parsing
//!
//! Query strings are deserialized into structs of raw `Option<String>` fields
//! and converted here, so a malformed value becomes a JSON 400 response
//! naming the parameter instead of a plain-text extractor rejection.
//! Empty values are treated as absent.

use crate::app::SortKey;
use crate::error::AppError;

/// Drop empty strings
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Required parameter; missing or empty is a 400
pub fn require(name: &str, value: Option<String>) -> Result<String, AppError> {
    non_empty(value).ok_or_else(|| AppError::BadRequest(format!("{} is required", name)))
}

/// Optional finite number
pub fn parse_f64(name: &str, value: Option<String>) -> Result<Option<f64>, AppError> {
    let Some(raw) = non_empty(value) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(AppError::BadRequest(format!(
            "{} must be a number, got '{}'",
            name, raw
        ))),
    }
}

/// Optional positive integer with a default
pub fn parse_positive(name: &str, value: Option<String>, default: usize) -> Result<usize, AppError> {
    let Some(raw) = non_empty(value) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::BadRequest(format!(
            "{} must be a positive integer, got '{}'",
            name, raw
        ))),
    }
}

/// Optional sort key (`rating` or `reviews`)
pub fn parse_sort(value: Option<String>) -> Result<Option<SortKey>, AppError> {
    non_empty(value)
        .map(|raw| raw.parse::<SortKey>().map_err(AppError::BadRequest))
        .transpose()
}
