//! JSON helpers for series artifacts.

use crate::errors::{ErrorInfo, SgwError};
use crate::series::FrequencySeries;

fn map_err(err: serde_json::Error, code: &str) -> SgwError {
    SgwError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a frequency series to JSON.
pub fn series_to_json(series: &FrequencySeries) -> Result<String, SgwError> {
    serde_json::to_string_pretty(series).map_err(|err| map_err(err, "series-serialize"))
}

/// Restores a frequency series from JSON.
pub fn series_from_json(json: &str) -> Result<FrequencySeries, SgwError> {
    serde_json::from_str(json).map_err(|err| map_err(err, "series-deserialize"))
}
