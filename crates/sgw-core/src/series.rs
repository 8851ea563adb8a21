//! Immutable frequency-series container backing every packaged product.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SgwError};

fn series_error(code: &str, message: impl Into<String>) -> SgwError {
    SgwError::Series(ErrorInfo::new(code, message))
}

/// A uniformly described frequency series: a sample grid, one value per
/// sample, and the `(delta_f, low_freq_cutoff)` description the grid was
/// expanded from.
///
/// The container is immutable after construction. Elementwise arithmetic
/// returns a new series and requires both operands to share the same
/// sample count and grid description. Note that `delta_f` is metadata
/// carried from the grid description; it is not necessarily the literal
/// spacing between adjacent samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencySeries {
    frequencies: Vec<f64>,
    values: Vec<f64>,
    delta_f: f64,
    low_freq_cutoff: f64,
}

impl FrequencySeries {
    /// Validates and packages raw sample arrays into a series.
    ///
    /// Fails when either array disagrees with `length`, when `length` is
    /// zero, when `delta_f` is not positive, or when `low_freq_cutoff` is
    /// negative.
    pub fn from_arrays(
        frequencies: Vec<f64>,
        values: Vec<f64>,
        length: usize,
        delta_f: f64,
        low_freq_cutoff: f64,
    ) -> Result<Self, SgwError> {
        if length == 0 {
            return Err(series_error(
                "empty-series",
                "a frequency series requires at least one sample",
            ));
        }
        if frequencies.len() != length {
            return Err(SgwError::Series(
                ErrorInfo::new(
                    "frequency-length-mismatch",
                    "frequency array does not match the declared length",
                )
                .with_context("expected", length.to_string())
                .with_context("actual", frequencies.len().to_string()),
            ));
        }
        if values.len() != length {
            return Err(SgwError::Series(
                ErrorInfo::new(
                    "value-length-mismatch",
                    "value array does not match the declared length",
                )
                .with_context("expected", length.to_string())
                .with_context("actual", values.len().to_string()),
            ));
        }
        if !(delta_f > 0.0) {
            return Err(SgwError::Series(
                ErrorInfo::new("invalid-delta-f", "delta_f must be positive")
                    .with_context("delta_f", delta_f.to_string()),
            ));
        }
        if low_freq_cutoff < 0.0 {
            return Err(SgwError::Series(
                ErrorInfo::new(
                    "invalid-low-freq-cutoff",
                    "low_freq_cutoff must be non-negative",
                )
                .with_context("low_freq_cutoff", low_freq_cutoff.to_string()),
            ));
        }
        Ok(Self {
            frequencies,
            values,
            delta_f,
            low_freq_cutoff,
        })
    }

    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no samples. Construction rejects empty
    /// series, so this is false for any built value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Frequency step the series was described with.
    pub fn delta_f(&self) -> f64 {
        self.delta_f
    }

    /// Low-frequency cutoff the series was described with.
    pub fn low_freq_cutoff(&self) -> f64 {
        self.low_freq_cutoff
    }

    /// Sample frequencies in grid order.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Sample values, ordered as the frequencies.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Frequency of sample `index`, if in range.
    pub fn frequency_at(&self, index: usize) -> Option<f64> {
        self.frequencies.get(index).copied()
    }

    /// Value of sample `index`, if in range.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Iterates `(frequency, value)` pairs in grid order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    fn check_same_grid(&self, other: &Self) -> Result<(), SgwError> {
        if self.len() != other.len() {
            return Err(SgwError::Series(
                ErrorInfo::new(
                    "series-length-mismatch",
                    "elementwise arithmetic requires equal sample counts",
                )
                .with_context("left", self.len().to_string())
                .with_context("right", other.len().to_string()),
            ));
        }
        if self.delta_f != other.delta_f || self.low_freq_cutoff != other.low_freq_cutoff {
            return Err(SgwError::Series(
                ErrorInfo::new(
                    "series-grid-mismatch",
                    "elementwise arithmetic requires an identical grid description",
                )
                .with_context("left_delta_f", self.delta_f.to_string())
                .with_context("right_delta_f", other.delta_f.to_string()),
            ));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Result<Self, SgwError> {
        self.check_same_grid(other)?;
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| op(*a, *b))
            .collect();
        Ok(Self {
            frequencies: self.frequencies.clone(),
            values,
            delta_f: self.delta_f,
            low_freq_cutoff: self.low_freq_cutoff,
        })
    }

    /// Elementwise sum of two series on the same grid.
    pub fn add(&self, other: &Self) -> Result<Self, SgwError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference of two series on the same grid.
    pub fn sub(&self, other: &Self) -> Result<Self, SgwError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Elementwise product of two series on the same grid.
    pub fn mul(&self, other: &Self) -> Result<Self, SgwError> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Elementwise quotient of two series on the same grid. Zero samples
    /// in the divisor propagate IEEE infinities and NaNs.
    pub fn div(&self, other: &Self) -> Result<Self, SgwError> {
        self.zip_with(other, |a, b| a / b)
    }

    /// Multiplies every sample by a scalar factor.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            frequencies: self.frequencies.clone(),
            values: self.values.iter().map(|v| v * factor).collect(),
            delta_f: self.delta_f,
            low_freq_cutoff: self.low_freq_cutoff,
        }
    }
}
