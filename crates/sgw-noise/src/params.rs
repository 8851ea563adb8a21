//! Parameter structs describing the instrument and the output grid.

use serde::{Deserialize, Serialize};

fn default_len_arm() -> f64 {
    2.5e9
}

fn default_acc_noise_level() -> f64 {
    3e-15
}

fn default_oms_noise_level() -> f64 {
    15e-12
}

/// Instrument design parameters entering every noise and response formula.
///
/// Defaults are the LISA design values: 2.5e9 m arm length, 3e-15
/// acceleration-noise amplitude, 15e-12 OMS-noise amplitude. All three
/// are positive by invariant; the formulas apply no runtime guards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InstrumentSpec {
    /// Single-arm length, in meters.
    #[serde(default = "default_len_arm")]
    pub len_arm: f64,
    /// Acceleration-noise amplitude.
    #[serde(default = "default_acc_noise_level")]
    pub acc_noise_level: f64,
    /// Optical-metrology-system noise amplitude.
    #[serde(default = "default_oms_noise_level")]
    pub oms_noise_level: f64,
}

impl Default for InstrumentSpec {
    fn default() -> Self {
        Self {
            len_arm: default_len_arm(),
            acc_noise_level: default_acc_noise_level(),
            oms_noise_level: default_oms_noise_level(),
        }
    }
}

/// Description of the frequency grid backing a packaged product.
///
/// The grid spans `[low_freq_cutoff, (length - 1) * 2 * delta_f]` in
/// `length` points; see [`crate::grid::frequency_grid`] for the exact
/// per-index sample formula. There is no canonical grid, so this struct
/// carries no defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridSpec {
    /// Number of samples.
    pub length: usize,
    /// Frequency step recorded on the output series.
    pub delta_f: f64,
    /// Lowest sampled frequency. Must be positive: f = 0 is a true
    /// singularity of the noise formulas.
    pub low_freq_cutoff: f64,
}
