//! Moving average smoothing
//!
//! One filter per sensor channel. The filter owns a [`SampleWindow`] and
//! reports the arithmetic mean of whatever the window currently holds, so
//! the first few outputs after boot average fewer than `N` samples.
//!
//! Asking for the mean of an empty window is an error rather than `0.0`:
//! a zero temperature is a plausible reading and would be indistinguishable
//! from "no data".

use alloc::format;

use crate::buffer::{SampleWindow, SampleWindowIter};
use crate::errors::{FilterError, FilterResult};

/// Fixed-window moving average over `N` samples
#[derive(Debug, Clone, Default)]
pub struct MovingAverageFilter<const N: usize> {
    window: SampleWindow<N>,
}

impl<const N: usize> MovingAverageFilter<N> {
    /// Create a filter with an empty window
    pub const fn new() -> Self {
        Self {
            window: SampleWindow::new(),
        }
    }

    /// Add a sample, dropping the oldest once `N` are held
    pub fn push(&mut self, value: f64) {
        self.window.push(value);
    }

    /// Arithmetic mean of the samples in the window
    pub fn mean(&self) -> FilterResult<f64> {
        if self.window.is_empty() {
            return Err(FilterError::EmptyWindow);
        }

        Ok(self.window.sum() / self.window.len() as f64)
    }

    /// Mean rounded to output precision (two decimals)
    pub fn rounded_mean(&self) -> FilterResult<f64> {
        self.mean().map(round2)
    }

    /// Number of samples contributing to the mean
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// True until the first push
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// True once the window holds `N` samples
    pub fn is_full(&self) -> bool {
        self.window.is_full()
    }

    /// Window size
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Samples oldest first
    pub fn iter(&self) -> SampleWindowIter<'_, N> {
        self.window.iter()
    }

    /// Borrow the underlying window
    pub fn window(&self) -> &SampleWindow<N> {
        &self.window
    }
}

/// Round to two decimal places
///
/// Rounds the exact binary value, ties to even, the way `{:.2}` prints it.
/// `(v * 100.0).round() / 100.0` differs whenever the scaling itself rounds:
/// 29.025 is stored just below the tie and must give 29.02.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    format!("{:.2}", value).parse().unwrap_or(value)
}
