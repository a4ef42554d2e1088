//! # Trend Math
//!
//! Numeric kernels for trend analysis of monthly series.
//! This crate knows nothing about sectors or calendars: it fits lines to
//! plain slices of values and rounds the results.

use thiserror::Error;

pub mod regression;

pub use regression::{least_squares, round_half_away, LinearFit};

/// Errors that can occur in trend calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for trend math operations
pub type Result<T> = std::result::Result<T, MathError>;
