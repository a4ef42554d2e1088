//! Counterfactual projection past the anchor and its deviation from outcomes

use crate::error::{ForecastError, Result};
use crate::models::TrendModel;
use crate::series::Series;
use crate::time::TimePoint;
use serde::Serialize;
use trend_math::round_half_away;

/// Observed minus projected for one month.
///
/// `value` is `None` when no observation exists for the month.
/// Positive means the actual outcome exceeded the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deviation {
    pub time: TimePoint,
    pub value: Option<f64>,
}

impl Deviation {
    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

/// Actual history, projected months and their deviations for one sector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    /// Last month of the fitting window
    pub anchor: TimePoint,
    /// Number of projected months
    pub horizon: usize,
    /// Observed values from the first month through `horizon` months past the anchor
    pub actual: Series,
    /// Trend values for the `horizon` months after the anchor, rounded to whole units
    pub projected: Series,
    pub deviations: Vec<Deviation>,
}

/// Extrapolate `model` over the `horizon` months after `anchor` and compare
/// against `series`.
///
/// The anchor's window position `k` is looked up the same way the fitter does.
/// The i-th projected month (`anchor + i + 1`) takes the trend value at
/// position `k + i`, rounded half away from zero.
pub fn project(
    series: &Series,
    anchor: TimePoint,
    model: &TrendModel,
    horizon: usize,
) -> Result<ProjectionResult> {
    let k = series.locate(anchor)?;

    let available = series.len() - 1 - k;
    if available < horizon {
        return Err(ForecastError::InsufficientHorizon {
            anchor,
            required: horizon,
            available,
        });
    }

    let actual = series.head(k + horizon);

    let projected = Series::from_trusted(
        (0..horizon)
            .map(|i| {
                Ok((
                    anchor.advance(i + 1)?,
                    round_half_away(model.value_at(k + i)),
                ))
            })
            .collect::<Result<Vec<_>>>()?,
    );

    let deviations = deviations(&actual, &projected);

    Ok(ProjectionResult {
        anchor,
        horizon,
        actual,
        projected,
        deviations,
    })
}

/// Observed minus rounded projection for every projected month
pub fn deviations(actual: &Series, projected: &Series) -> Vec<Deviation> {
    projected
        .iter()
        .map(|&(time, projection)| Deviation {
            time,
            value: actual
                .get(time)
                .map(|observed| observed - round_half_away(projection)),
        })
        .collect()
}
