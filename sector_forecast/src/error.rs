//! Error types for the sector_forecast crate

use crate::classification::Sector;
use crate::time::TimePoint;
use thiserror::Error;
use trend_math::MathError;

/// Custom error types for the sector_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Empty or malformed classification input, or an invalid analysis parameter
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Ragged, empty or otherwise mis-shaped series and tables
    #[error("Input shape error: {0}")]
    InputShape(String),

    /// The anchor month is not covered by the series history
    #[error("Anchor month {anchor} not found in series")]
    AnchorNotFound { anchor: TimePoint },

    /// Too few points to fit a trend
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Fewer observed months after the anchor than the horizon asks for
    #[error(
        "Insufficient horizon after {anchor}: need {required} observed months, found {available}"
    )]
    InsufficientHorizon {
        anchor: TimePoint,
        required: usize,
        available: usize,
    },

    /// A single sector's pipeline failed
    #[error("{sector} sector: {source}")]
    SectorFailure {
        sector: Sector,
        #[source]
        source: Box<ForecastError>,
    },

    /// Unparseable label or number
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ForecastError {
    /// Attach the sector name to an error raised inside that sector's pipeline
    pub fn in_sector(self, sector: Sector) -> Self {
        match self {
            already @ ForecastError::SectorFailure { .. } => already,
            other => ForecastError::SectorFailure {
                sector,
                source: Box::new(other),
            },
        }
    }
}

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData(msg) => ForecastError::InsufficientData(msg),
            MathError::InvalidInput(msg) | MathError::CalculationError(msg) => {
                ForecastError::InputShape(msg)
            }
        }
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
