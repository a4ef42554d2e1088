//! Ordinary least-squares line fitting over a positional index
//!
//! The independent variable is always the zero-based position of a value in
//! the input slice, never a calendar quantity.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Coefficients of a fitted line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at position `x`
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Get the R-squared value (coefficient of determination) of this line
    /// against the values it was fitted on.
    ///
    /// Returns `None` when the values have no variance, since the ratio is
    /// undefined for a flat window.
    pub fn r_squared(&self, values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }

        let y_mean = values.iter().sum::<f64>() / values.len() as f64;

        let mut ss_total = 0.0; // total sum of squares
        let mut ss_residual = 0.0; // residual sum of squares

        for (i, &y) in values.iter().enumerate() {
            let y_pred = self.value_at(i as f64);
            ss_total += (y - y_mean).powi(2);
            ss_residual += (y - y_pred).powi(2);
        }

        if ss_total.abs() < 1e-10 {
            return None;
        }

        Some(1.0 - (ss_residual / ss_total))
    }
}

/// Fit a least-squares line to `values`, using each value's position as x.
///
/// At least two values are required. Non-finite inputs are rejected.
pub fn least_squares(values: &[f64]) -> Result<LinearFit> {
    if values.len() < 2 {
        return Err(MathError::InsufficientData(format!(
            "Need at least 2 points for a least-squares fit, got {}",
            values.len()
        )));
    }

    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(MathError::InvalidInput(format!(
            "Cannot fit a line through non-finite value {}",
            bad
        )));
    }

    let n = values.len() as f64;

    // Calculate means
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    // Positions are distinct, so this only trips on overflow
    if denominator <= 0.0 || !denominator.is_finite() {
        return Err(MathError::CalculationError(
            "Cannot calculate slope: degenerate x spread".to_string(),
        ));
    }

    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;

    Ok(LinearFit { slope, intercept })
}

/// Round to the nearest whole number, ties away from zero.
pub fn round_half_away(value: f64) -> f64 {
    // f64::round already breaks ties away from zero
    value.round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_perfect_line() {
        let fit = least_squares(&[10.0, 20.0, 30.0]).unwrap();

        assert_abs_diff_eq!(fit.slope, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fit.intercept, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fit.value_at(3.0), 40.0, epsilon = 1e-9);
        assert!(fit.r_squared(&[10.0, 20.0, 30.0]).unwrap() > 0.999);
    }

    #[test]
    fn test_constant_values() {
        let fit = least_squares(&[7.5; 6]).unwrap();

        assert_eq!(fit.slope, 0.0);
        assert_abs_diff_eq!(fit.intercept, 7.5, epsilon = 1e-12);
        assert_eq!(fit.r_squared(&[7.5; 6]), None);
    }

    #[test]
    fn test_noisy_line() {
        // y = 2x + 1 with symmetric noise
        let values = [1.5, 2.5, 5.5, 6.5];
        let fit = least_squares(&values).unwrap();

        assert_abs_diff_eq!(fit.slope, 1.8, epsilon = 1e-9);
        assert_abs_diff_eq!(fit.intercept, 1.3, epsilon = 1e-9);

        let r2 = fit.r_squared(&values).unwrap();
        assert!(r2 > 0.9 && r2 < 1.0);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[42.0])]
    fn test_too_few_points(#[case] values: &[f64]) {
        assert!(matches!(
            least_squares(values),
            Err(MathError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            least_squares(&[1.0, f64::NAN, 3.0]),
            Err(MathError::InvalidInput(_))
        ));
    }

    #[rstest]
    #[case(2.5, 3.0)]
    #[case(-2.5, -3.0)]
    #[case(2.49, 2.0)]
    #[case(-0.5, -1.0)]
    #[case(4.0, 4.0)]
    fn test_round_half_away(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(round_half_away(input), expected);
    }
}
