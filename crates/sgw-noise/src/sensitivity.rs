//! Detector sensitivity curves.

use std::f64::consts::PI;

use crate::grid::map_frequencies;
use crate::params::InstrumentSpec;
use crate::response::averaged_tdi_2p0_response;
use crate::tdi::psd_tdi_2p0_xyz_at;

/// Semi-analytical sensitivity: the TDI-2.0 X/Y/Z PSD divided by the
/// TDI-2.0 averaged response at the same frequency.
///
/// Undefined where the response vanishes (`sin 2ω = 0`); the division
/// propagates IEEE Inf/NaN and is not special-cased.
pub fn semi_analytical_sensitivity(f: f64, inst: &InstrumentSpec) -> f64 {
    psd_tdi_2p0_xyz_at(f, inst) / averaged_tdi_2p0_response(f, inst.len_arm)
}

/// Semi-analytical sensitivity over a caller-supplied frequency array.
pub fn semi_analytical_sensitivity_curve(frequencies: &[f64], inst: &InstrumentSpec) -> Vec<f64> {
    map_frequencies(frequencies, |f| semi_analytical_sensitivity(f, inst))
}

/// Fully analytical SciRD sensitivity curve, independent of the channel
/// combiners and of the instrument parameters.
pub fn scird_sensitivity(f: f64) -> f64 {
    let s_i = 5.76e-48 * (1.0 + (4e-4 / f).powi(2));
    let s_ii = 3.6e-41;
    let reddening = 1.0 + (f / 2.5e-2).powi(2);
    10.0 / 3.0 * (s_i / (2.0 * PI * f).powi(4) + s_ii) * reddening
}

/// SciRD sensitivity over a caller-supplied frequency array.
pub fn scird_sensitivity_curve(frequencies: &[f64]) -> Vec<f64> {
    map_frequencies(frequencies, scird_sensitivity)
}
