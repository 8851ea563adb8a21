use sgw_noise::{
    arm_transfer_phase, averaged_antenna_response_sq, averaged_tdi_1p5_response,
    averaged_tdi_1p5_response_curve, averaged_tdi_2p0_response, averaged_tdi_2p0_response_curve,
};

fn log_spaced(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|idx| lo * (hi / lo).powf(idx as f64 / (count - 1) as f64))
        .collect()
}

#[test]
fn tdi_2p0_response_factors_through_tdi_1p5() {
    for &len_arm in &[2.5e9, 5.0e9] {
        for &f in &log_spaced(1e-5, 1e-1, 41) {
            let omega = arm_transfer_phase(f, len_arm);
            let expected =
                averaged_tdi_1p5_response(f, len_arm) * (2.0 * (2.0 * omega).sin()).powi(2);
            assert_eq!(averaged_tdi_2p0_response(f, len_arm), expected);
        }
    }
}

#[test]
fn antenna_pattern_approaches_long_wavelength_limit() {
    // ω → 0 drives the averaged pattern to its 3/20 long-wavelength value.
    let low = averaged_antenna_response_sq(1e-9, 2.5e9);
    assert!((low - 0.15).abs() < 1e-10);
    // The pattern decays monotonically once the arm resolves the wave.
    let mid = averaged_antenna_response_sq(1e-2, 2.5e9);
    let high = averaged_antenna_response_sq(1e-1, 2.5e9);
    assert!(low > mid);
    assert!(mid > high);
}

#[test]
fn curve_forms_match_scalar_forms_elementwise() {
    let frequencies = log_spaced(1e-4, 1e-1, 17);
    let len_arm = 2.5e9;
    let tdi_1p5 = averaged_tdi_1p5_response_curve(&frequencies, len_arm);
    let tdi_2p0 = averaged_tdi_2p0_response_curve(&frequencies, len_arm);
    assert_eq!(tdi_1p5.len(), frequencies.len());
    for (idx, &f) in frequencies.iter().enumerate() {
        assert_eq!(tdi_1p5[idx], averaged_tdi_1p5_response(f, len_arm));
        assert_eq!(tdi_2p0[idx], averaged_tdi_2p0_response(f, len_arm));
    }
}
