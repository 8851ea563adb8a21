//! Frequency-grid expansion shared by every channel combiner.

use sgw_core::errors::{ErrorInfo, SgwError};

use crate::params::GridSpec;

/// Evenly spaced samples from `start` to `stop` inclusive.
///
/// Sample `i` is `start + (stop - start) * i / (count - 1)`; a count of
/// one yields `[start]` and a count of zero yields an empty vector.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }
    let last = (count - 1) as f64;
    let mut samples = Vec::with_capacity(count);
    for idx in 0..count {
        samples.push(start + (stop - start) * idx as f64 / last);
    }
    samples
}

/// Expands a grid description into its explicit sample array.
///
/// The grid is `linspace(low_freq_cutoff, (length - 1) * 2 * delta_f,
/// length)`: the point spacing is interpolated across that span, not
/// taken from `delta_f` itself, which is carried as series metadata only.
/// Callers must not assume sample `i` equals
/// `low_freq_cutoff + i * delta_f`.
pub fn frequency_grid(grid: &GridSpec) -> Result<Vec<f64>, SgwError> {
    if grid.length == 0 {
        return Err(SgwError::Grid(ErrorInfo::new(
            "empty-grid",
            "a frequency grid requires at least one sample",
        )));
    }
    if !(grid.delta_f > 0.0) {
        return Err(SgwError::Grid(
            ErrorInfo::new("invalid-delta-f", "delta_f must be positive")
                .with_context("delta_f", grid.delta_f.to_string()),
        ));
    }
    if grid.low_freq_cutoff < 0.0 {
        return Err(SgwError::Grid(
            ErrorInfo::new(
                "invalid-low-freq-cutoff",
                "low_freq_cutoff must be non-negative",
            )
            .with_context("low_freq_cutoff", grid.low_freq_cutoff.to_string()),
        ));
    }
    let span_end = (grid.length - 1) as f64 * 2.0 * grid.delta_f;
    Ok(linspace(grid.low_freq_cutoff, span_end, grid.length))
}

/// Applies `func` to every sample of `frequencies`, preserving order.
pub fn map_frequencies(frequencies: &[f64], func: impl Fn(f64) -> f64) -> Vec<f64> {
    frequencies.iter().map(|&f| func(f)).collect()
}
