//! Least-squares trend over the months up to an anchor

use crate::error::Result;
use crate::models::TrendModel;
use crate::series::Series;
use crate::time::TimePoint;
use trend_math::least_squares;

/// Fit a line to `series` from its first month through `anchor` inclusive.
///
/// Fails with `AnchorNotFound` when `anchor` is not in the series and with
/// `InsufficientData` when the window has fewer than two months.
pub fn fit(series: &Series, anchor: TimePoint) -> Result<TrendModel> {
    fit_with_quality(series, anchor).map(|(model, _)| model)
}

/// Like [`fit`], also returning R-squared over the fitting window
/// (`None` for a flat window).
pub fn fit_with_quality(series: &Series, anchor: TimePoint) -> Result<(TrendModel, Option<f64>)> {
    let k = series.locate(anchor)?;
    let window = series.head(k).values();

    let line = least_squares(&window)?;
    let r_squared = line.r_squared(&window);

    Ok((TrendModel::from(line), r_squared))
}
