//! Analytical PSDs and CSDs for the TDI channel combinations.
//!
//! Each combiner expands the grid description once, evaluates the noise
//! components and the arm transfer phase at every sample, applies one
//! closed-form combination, and packages the result as a
//! [`FrequencySeries`]. Samples at f = 0 propagate NaN from the noise
//! primitives; choosing `low_freq_cutoff > 0` is the caller's job.

use sgw_core::errors::SgwError;
use sgw_core::series::FrequencySeries;

use crate::grid::frequency_grid;
use crate::noise::{arm_transfer_phase, noise_components};
use crate::params::{GridSpec, InstrumentSpec};

fn psd_tdi_1p5_xyz_at(f: f64, inst: &InstrumentSpec) -> f64 {
    let (s_acc, s_oms) = noise_components(f, inst.acc_noise_level, inst.oms_noise_level);
    let omega = arm_transfer_phase(f, inst.len_arm);
    16.0 * omega.sin().powi(2) * (s_oms + s_acc * (3.0 + omega.cos()))
}

pub(crate) fn psd_tdi_2p0_xyz_at(f: f64, inst: &InstrumentSpec) -> f64 {
    let (s_acc, s_oms) = noise_components(f, inst.acc_noise_level, inst.oms_noise_level);
    let omega = arm_transfer_phase(f, inst.len_arm);
    64.0 * omega.sin().powi(2)
        * (2.0 * omega).sin().powi(2)
        * (s_oms + s_acc * (3.0 + (2.0 * omega).cos()))
}

fn csd_tdi_1p5_xy_at(f: f64, inst: &InstrumentSpec) -> f64 {
    let (s_acc, s_oms) = noise_components(f, inst.acc_noise_level, inst.oms_noise_level);
    let omega = arm_transfer_phase(f, inst.len_arm);
    -8.0 * omega.sin().powi(2) * omega.cos() * (s_oms + 4.0 * s_acc)
}

fn psd_tdi_1p5_ae_at(f: f64, inst: &InstrumentSpec) -> f64 {
    let (s_acc, s_oms) = noise_components(f, inst.acc_noise_level, inst.oms_noise_level);
    let omega = arm_transfer_phase(f, inst.len_arm);
    8.0 * omega.sin().powi(2)
        * (4.0 * (1.0 + omega.cos() + omega.cos().powi(2)) * s_acc
            + (2.0 + omega.cos()) * s_oms)
}

fn psd_tdi_1p5_t_at(f: f64, inst: &InstrumentSpec) -> f64 {
    let (s_acc, s_oms) = noise_components(f, inst.acc_noise_level, inst.oms_noise_level);
    let omega = arm_transfer_phase(f, inst.len_arm);
    let half_sin_sq = (omega / 2.0).sin().powi(2);
    32.0 * omega.sin().powi(2) * half_sin_sq * (4.0 * s_acc * half_sin_sq + s_oms)
}

fn combine(
    grid: &GridSpec,
    inst: &InstrumentSpec,
    per_sample: impl Fn(f64, &InstrumentSpec) -> f64,
) -> Result<FrequencySeries, SgwError> {
    let frequencies = frequency_grid(grid)?;
    let mut values = Vec::with_capacity(frequencies.len());
    for &f in &frequencies {
        values.push(per_sample(f, inst));
    }
    FrequencySeries::from_arrays(
        frequencies,
        values,
        grid.length,
        grid.delta_f,
        grid.low_freq_cutoff,
    )
}

/// TDI-1.5 X/Y/Z channel PSD on the described grid:
/// `16·sin²ω·(S_oms + S_acc·(3 + cos ω))`.
pub fn analytical_psd_tdi_1p5_xyz(
    grid: &GridSpec,
    inst: &InstrumentSpec,
) -> Result<FrequencySeries, SgwError> {
    combine(grid, inst, psd_tdi_1p5_xyz_at)
}

/// TDI-2.0 X/Y/Z channel PSD on the described grid:
/// `64·sin²ω·sin²2ω·(S_oms + S_acc·(3 + cos 2ω))`.
pub fn analytical_psd_tdi_2p0_xyz(
    grid: &GridSpec,
    inst: &InstrumentSpec,
) -> Result<FrequencySeries, SgwError> {
    combine(grid, inst, psd_tdi_2p0_xyz_at)
}

/// Cross-spectral density between the co-phased TDI-1.5 X and Y channels:
/// `-8·sin²ω·cos ω·(S_oms + 4·S_acc)`. Signed real, not complex.
pub fn analytical_csd_tdi_1p5_xy(
    grid: &GridSpec,
    inst: &InstrumentSpec,
) -> Result<FrequencySeries, SgwError> {
    combine(grid, inst, csd_tdi_1p5_xy_at)
}

/// TDI-1.5 A and E channel PSD on the described grid.
pub fn analytical_psd_tdi_1p5_ae(
    grid: &GridSpec,
    inst: &InstrumentSpec,
) -> Result<FrequencySeries, SgwError> {
    combine(grid, inst, psd_tdi_1p5_ae_at)
}

/// TDI-1.5 T (null) channel PSD on the described grid.
pub fn analytical_psd_tdi_1p5_t(
    grid: &GridSpec,
    inst: &InstrumentSpec,
) -> Result<FrequencySeries, SgwError> {
    combine(grid, inst, psd_tdi_1p5_t_at)
}
