//! Trend models fitted to a sector's pre-event history

use serde::{Deserialize, Serialize};
use trend_math::LinearFit;

/// A straight line `value ≈ slope * index + intercept`.
///
/// `index` is the zero-based position of a month inside the window the model
/// was fitted on, not a calendar quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Unrounded trend value at a window position
    pub fn value_at(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }
}

impl From<LinearFit> for TrendModel {
    fn from(fit: LinearFit) -> Self {
        Self::new(fit.slope, fit.intercept)
    }
}

pub mod linear_trend;

pub use linear_trend::{fit, fit_with_quality};
