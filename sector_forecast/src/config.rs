//! Analysis parameters

use crate::error::{ForecastError, Result};
use crate::time::TimePoint;
use serde::{Deserialize, Serialize};

/// Last pre-event month used by default: February 2020
pub const DEFAULT_ANCHOR: (i32, u32) = (2020, 2);

/// Months projected past the anchor by default
pub const DEFAULT_HORIZON: usize = 3;

/// Where the fitting window ends and how far to project past it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    anchor: TimePoint,
    horizon: usize,
}

impl AnalysisConfig {
    /// Create a configuration. The horizon must be at least one month.
    pub fn new(anchor: TimePoint, horizon: usize) -> Result<Self> {
        if horizon == 0 {
            return Err(ForecastError::Configuration(
                "Projection horizon must be at least one month".to_string(),
            ));
        }

        Ok(Self { anchor, horizon })
    }

    pub fn with_anchor(self, anchor: TimePoint) -> Self {
        Self { anchor, ..self }
    }

    pub fn with_horizon(self, horizon: usize) -> Result<Self> {
        Self::new(self.anchor, horizon)
    }

    pub fn anchor(&self) -> TimePoint {
        self.anchor
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let (year, month) = DEFAULT_ANCHOR;
        Self {
            anchor: TimePoint::from_parts(year, month),
            horizon: DEFAULT_HORIZON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.anchor(), TimePoint::new(2020, 2).unwrap());
        assert_eq!(config.horizon(), 3);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        assert!(matches!(
            AnalysisConfig::default().with_horizon(0),
            Err(ForecastError::Configuration(_))
        ));
    }

    #[test]
    fn test_with_anchor() {
        let anchor = TimePoint::new(2008, 9).unwrap();
        let config = AnalysisConfig::default().with_anchor(anchor);
        assert_eq!(config.anchor(), anchor);
        assert_eq!(config.horizon(), DEFAULT_HORIZON);
    }
}
