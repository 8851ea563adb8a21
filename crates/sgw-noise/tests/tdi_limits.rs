use sgw_noise::{arm_transfer_phase, noise_components};

// The TDI transfer envelopes vanish with the arm phase: holding the
// noise components fixed at a reference frequency, the X/Y/Z channel
// factors tend to zero as f (hence ω) approaches zero. Evaluated near,
// not at, zero: f = 0 itself is a singularity of the noise primitives.
#[test]
fn xyz_transfer_envelopes_vanish_toward_zero_frequency() {
    let len_arm = 2.5e9;
    let (s_acc, s_oms) = noise_components(1e-3, 3e-15, 15e-12);

    let envelope_1p5 = |f: f64| {
        let omega = arm_transfer_phase(f, len_arm);
        16.0 * omega.sin().powi(2) * (s_oms + s_acc * (3.0 + omega.cos()))
    };
    let envelope_2p0 = |f: f64| {
        let omega = arm_transfer_phase(f, len_arm);
        64.0 * omega.sin().powi(2)
            * (2.0 * omega).sin().powi(2)
            * (s_oms + s_acc * (3.0 + (2.0 * omega).cos()))
    };

    let mut previous_1p5 = f64::INFINITY;
    let mut previous_2p0 = f64::INFINITY;
    for &f in &[1e-4, 1e-5, 1e-6, 1e-7, 1e-8] {
        let value_1p5 = envelope_1p5(f);
        let value_2p0 = envelope_2p0(f);
        assert!(value_1p5 > 0.0);
        assert!(value_2p0 > 0.0);
        assert!(value_1p5 < previous_1p5);
        assert!(value_2p0 < previous_2p0);
        previous_1p5 = value_1p5;
        previous_2p0 = value_2p0;
    }
    // sin²ω scales the TDI-1.5 envelope as ω² in the small-phase limit.
    let ratio = envelope_1p5(1e-7) / envelope_1p5(1e-6);
    assert!((ratio - 1e-2).abs() < 1e-4);
}
