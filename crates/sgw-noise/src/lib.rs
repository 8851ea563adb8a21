//! Analytical noise spectra, responses, and sensitivity curves for
//! space-borne gravitational-wave detectors.
//!
//! The closed forms follow the LISA technical note
//! <LISA-LCST-SGS-TN-001>, the LDC manual <LISA-LCST-SGS-MAN-001>, and
//! paper <10.1088/1361-6382/ab1101>. Everything is a pure function of
//! its numeric arguments: repeated calls with identical inputs produce
//! bit-identical outputs.

pub mod grid;
pub mod noise;
pub mod params;
pub mod response;
pub mod sensitivity;
pub mod tdi;

pub use grid::{frequency_grid, linspace, map_frequencies};
pub use noise::{acceleration_noise_psd, arm_transfer_phase, noise_components, oms_noise_psd};
pub use params::{GridSpec, InstrumentSpec};
pub use response::{
    averaged_antenna_response_sq, averaged_antenna_response_sq_curve, averaged_tdi_1p5_response,
    averaged_tdi_1p5_response_curve, averaged_tdi_2p0_response, averaged_tdi_2p0_response_curve,
};
pub use sensitivity::{
    scird_sensitivity, scird_sensitivity_curve, semi_analytical_sensitivity,
    semi_analytical_sensitivity_curve,
};
pub use tdi::{
    analytical_csd_tdi_1p5_xy, analytical_psd_tdi_1p5_ae, analytical_psd_tdi_1p5_t,
    analytical_psd_tdi_1p5_xyz, analytical_psd_tdi_2p0_xyz,
};
