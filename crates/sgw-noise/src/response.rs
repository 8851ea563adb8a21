//! Sky and polarization averaged response functions.
//!
//! Unlike the channel combiners, response functions never build a grid:
//! the `_curve` forms evaluate directly on whatever frequency array the
//! caller supplies.

use crate::grid::map_frequencies;
use crate::noise::arm_transfer_phase;

/// Averaged squared antenna pattern approximation `3/20 / (1 + 0.6·ω²)`.
pub fn averaged_antenna_response_sq(f: f64, len_arm: f64) -> f64 {
    let omega = arm_transfer_phase(f, len_arm);
    3.0 / 20.0 / (1.0 + 0.6 * omega.powi(2))
}

/// Averaged TDI-1.5 response: `(4ω)²·sin²ω` times the antenna pattern.
pub fn averaged_tdi_1p5_response(f: f64, len_arm: f64) -> f64 {
    let omega = arm_transfer_phase(f, len_arm);
    (4.0 * omega).powi(2) * omega.sin().powi(2) * averaged_antenna_response_sq(f, len_arm)
}

/// Averaged TDI-2.0 response: the TDI-1.5 response times `(2·sin 2ω)²`.
pub fn averaged_tdi_2p0_response(f: f64, len_arm: f64) -> f64 {
    let omega = arm_transfer_phase(f, len_arm);
    averaged_tdi_1p5_response(f, len_arm) * (2.0 * (2.0 * omega).sin()).powi(2)
}

/// Antenna pattern evaluated over a caller-supplied frequency array.
pub fn averaged_antenna_response_sq_curve(frequencies: &[f64], len_arm: f64) -> Vec<f64> {
    map_frequencies(frequencies, |f| averaged_antenna_response_sq(f, len_arm))
}

/// TDI-1.5 response evaluated over a caller-supplied frequency array.
pub fn averaged_tdi_1p5_response_curve(frequencies: &[f64], len_arm: f64) -> Vec<f64> {
    map_frequencies(frequencies, |f| averaged_tdi_1p5_response(f, len_arm))
}

/// TDI-2.0 response evaluated over a caller-supplied frequency array.
pub fn averaged_tdi_2p0_response_curve(frequencies: &[f64], len_arm: f64) -> Vec<f64> {
    map_frequencies(frequencies, |f| averaged_tdi_2p0_response(f, len_arm))
}
