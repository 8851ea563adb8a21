//! Acceleration and OMS noise primitives.
//!
//! Both PSDs are expressed in relative-frequency units, ready for the
//! TDI channel combinations. They are undefined at f = 0 (division by f
//! and by `(2πf)^4`); the singularity propagates as IEEE Inf/NaN rather
//! than being guarded.

use std::f64::consts::PI;

use sgw_core::constants::SPEED_OF_LIGHT;

/// Single-arm light-travel phase `2π·f·len_arm/c`, in radians.
pub fn arm_transfer_phase(f: f64, len_arm: f64) -> f64 {
    2.0 * PI * f * len_arm / SPEED_OF_LIGHT
}

/// PSD of the test-mass acceleration noise at one frequency.
pub fn acceleration_noise_psd(f: f64, acc_noise_level: f64) -> f64 {
    let s_acc =
        acc_noise_level.powi(2) * (1.0 + (4e-4 / f).powi(2)) * (1.0 + (f / 8e-3).powi(4));
    let s_acc_d = s_acc * (2.0 * PI * f).powi(-4);
    s_acc_d * (2.0 * PI * f / SPEED_OF_LIGHT).powi(2)
}

/// PSD of the optical-metrology-system noise at one frequency.
pub fn oms_noise_psd(f: f64, oms_noise_level: f64) -> f64 {
    let s_oms_d = oms_noise_level.powi(2) * (1.0 + (2e-3 / f).powi(4));
    s_oms_d * (2.0 * PI * f / SPEED_OF_LIGHT).powi(2)
}

/// Both noise components at one frequency, as `(acceleration, oms)`.
///
/// Convenience pair consumed by every channel combiner; no computation
/// beyond the two primitive calls.
pub fn noise_components(f: f64, acc_noise_level: f64, oms_noise_level: f64) -> (f64, f64) {
    (
        acceleration_noise_psd(f, acc_noise_level),
        oms_noise_psd(f, oms_noise_level),
    )
}
