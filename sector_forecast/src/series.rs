//! Gap-free monthly series

use crate::error::{ForecastError, Result};
use crate::time::TimePoint;
use serde::Serialize;

/// An ordered sequence of `(TimePoint, value)` pairs with exactly one point per month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    points: Vec<(TimePoint, f64)>,
}

impl Series {
    /// Create a series, checking that months are consecutive and values are
    /// finite and non-negative.
    pub fn new(points: Vec<(TimePoint, f64)>) -> Result<Self> {
        for window in points.windows(2) {
            let (prev, next) = (window[0].0, window[1].0);
            if prev.succ() != Some(next) {
                return Err(ForecastError::InputShape(format!(
                    "Series months must be consecutive: {} is followed by {} ({} months later)",
                    prev,
                    next,
                    prev.months_until(&next)
                )));
            }
        }

        if let Some((time, value)) = points.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(ForecastError::InputShape(format!(
                "Series values must be finite and non-negative, got {} at {}",
                value, time
            )));
        }

        Ok(Self { points })
    }

    /// Create a contiguous series starting at `start`
    pub fn from_values(start: TimePoint, values: Vec<f64>) -> Result<Self> {
        let points = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Ok((start.advance(i)?, v)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }

    /// Build without the value check. Month contiguity is the caller's job.
    pub(crate) fn from_trusted(points: Vec<(TimePoint, f64)>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].0.succ() == Some(w[1].0)));
        Self { points }
    }

    /// Position of `time` in this series (first match)
    pub fn locate(&self, time: TimePoint) -> Result<usize> {
        self.points
            .iter()
            .position(|(t, _)| *t == time)
            .ok_or(ForecastError::AnchorNotFound { anchor: time })
    }

    /// Observed value at `time`, if covered
    pub fn get(&self, time: TimePoint) -> Option<f64> {
        self.points
            .iter()
            .find(|(t, _)| *t == time)
            .map(|(_, v)| *v)
    }

    /// Prefix up to and including position `last`, clipped to the series length
    pub fn head(&self, last: usize) -> Series {
        let end = (last + 1).min(self.points.len());
        Series {
            points: self.points[..end].to_vec(),
        }
    }

    pub fn points(&self) -> &[(TimePoint, f64)] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    /// The time axis of this series
    pub fn index(&self) -> Vec<TimePoint> {
        self.points.iter().map(|(t, _)| *t).collect()
    }

    pub fn first(&self) -> Option<TimePoint> {
        self.points.first().map(|(t, _)| *t)
    }

    pub fn last(&self) -> Option<TimePoint> {
        self.points.last().map(|(t, _)| *t)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(TimePoint, f64)> {
        self.points.iter()
    }
}
