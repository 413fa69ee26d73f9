//! Field parsers for the textual source formats.

use chrono::NaiveDate;
use data_spi::{DataError, Result};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Parse a date in `YYYY-MM-DD` or `DD/MM/YYYY` form.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| DataError::InvalidDate(value.to_string()))
}

/// Parse a holiday flag. Accepts TRUE/FALSE in any case and 1/0.
pub fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(format!("invalid boolean flag '{}'", other)),
    }
}

/// Parse a numeric field where `NA`, `NaN` and blanks mean missing.
pub fn parse_optional_number(value: &str) -> std::result::Result<Option<f64>, String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("na") || value.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|e| format!("invalid number '{}': {}", value, e))
}
