#![deny(missing_docs)]
#![doc = "Core types and constants for space-borne GW detector noise modelling."]

pub mod constants;
pub mod errors;
pub mod serde;
pub mod series;

pub use constants::SPEED_OF_LIGHT;
pub use errors::{ErrorInfo, SgwError};
pub use crate::serde::{series_from_json, series_to_json};
pub use series::FrequencySeries;
