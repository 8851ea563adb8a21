use criterion::{criterion_group, criterion_main, Criterion};
use sgw_noise::{
    analytical_csd_tdi_1p5_xy, analytical_psd_tdi_1p5_ae, analytical_psd_tdi_1p5_t,
    analytical_psd_tdi_1p5_xyz, analytical_psd_tdi_2p0_xyz, semi_analytical_sensitivity_curve,
    GridSpec, InstrumentSpec,
};

fn wide_grid() -> GridSpec {
    GridSpec {
        length: 4096,
        delta_f: 1e-6,
        low_freq_cutoff: 1e-4,
    }
}

fn bench_combiners(c: &mut Criterion) {
    let grid = wide_grid();
    let inst = InstrumentSpec::default();
    c.bench_function("psd_tdi_1p5_xyz_4096", |b| {
        b.iter(|| analytical_psd_tdi_1p5_xyz(&grid, &inst).expect("psd"))
    });
    c.bench_function("psd_tdi_2p0_xyz_4096", |b| {
        b.iter(|| analytical_psd_tdi_2p0_xyz(&grid, &inst).expect("psd"))
    });
    c.bench_function("csd_tdi_1p5_xy_4096", |b| {
        b.iter(|| analytical_csd_tdi_1p5_xy(&grid, &inst).expect("csd"))
    });
    c.bench_function("psd_tdi_1p5_ae_4096", |b| {
        b.iter(|| analytical_psd_tdi_1p5_ae(&grid, &inst).expect("psd"))
    });
    c.bench_function("psd_tdi_1p5_t_4096", |b| {
        b.iter(|| analytical_psd_tdi_1p5_t(&grid, &inst).expect("psd"))
    });
}

fn bench_sensitivity(c: &mut Criterion) {
    let inst = InstrumentSpec::default();
    let frequencies: Vec<f64> = (1..=4096).map(|idx| idx as f64 * 1e-5).collect();
    c.bench_function("semi_analytical_sensitivity_4096", |b| {
        b.iter(|| semi_analytical_sensitivity_curve(&frequencies, &inst))
    });
}

criterion_group!(benches, bench_combiners, bench_sensitivity);
criterion_main!(benches);
