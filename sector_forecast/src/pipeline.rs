//! End-to-end sector analysis
//!
//! Categorize once, then aggregate, fit and project each sector on its own.
//! Sector pipelines share nothing and run in parallel.

use crate::aggregate::aggregate_sector;
use crate::categorize::categorize;
use crate::classification::{Classification, Sector};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::metrics::DeviationSummary;
use crate::models::{fit_with_quality, TrendModel};
use crate::projection::{project, ProjectionResult};
use crate::report::SectorReport;
use crate::series::Series;
use crate::table::IndustryTable;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Everything computed for one sector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorOutlook {
    pub sector: Sector,
    pub model: TrendModel,
    /// Goodness of fit over the pre-event window
    pub r_squared: Option<f64>,
    pub projection: ProjectionResult,
    pub summary: DeviationSummary,
}

/// Fit, project and summarize a single sector series
#[tracing::instrument(level = "debug", skip(series, config), fields(anchor = %config.anchor()))]
pub fn analyze_sector(
    sector: Sector,
    series: &Series,
    config: &AnalysisConfig,
) -> Result<SectorOutlook> {
    let (model, r_squared) = fit_with_quality(series, config.anchor())?;
    let projection = project(series, config.anchor(), &model, config.horizon())?;
    let summary = DeviationSummary::from_projection(&projection);

    info!(
        sector = %sector,
        slope = model.slope,
        intercept = model.intercept,
        total_deviation = summary.total,
        "sector projected"
    );

    Ok(SectorOutlook {
        sector,
        model,
        r_squared,
        projection,
        summary,
    })
}

/// Check alignment and split an industry table by sector
pub fn prepare(
    industries: &IndustryTable,
    classification: &Classification,
) -> Result<BTreeMap<Sector, IndustryTable>> {
    industries.check_aligned()?;
    categorize(industries, classification)
}

/// Aggregate, fit and project every sector independently, keeping each
/// sector's own outcome
pub fn analyze_each(
    categorized: &BTreeMap<Sector, IndustryTable>,
    config: &AnalysisConfig,
) -> Vec<(Sector, Result<SectorOutlook>)> {
    let entries: Vec<(Sector, &IndustryTable)> =
        categorized.iter().map(|(s, t)| (*s, t)).collect();

    entries
        .into_par_iter()
        .map(|(sector, members)| {
            let outcome = aggregate_sector(sector, members)
                .and_then(|series| analyze_sector(sector, &series, config))
                .map_err(|e| e.in_sector(sector));
            if let Err(e) = &outcome {
                warn!(sector = %sector, error = %e, "sector pipeline failed");
            }
            (sector, outcome)
        })
        .collect()
}

/// Full run from industry table to report.
///
/// Fails on the first sector (in sector order) whose pipeline fails; no
/// partial report is produced.
pub fn analyze(
    industries: &IndustryTable,
    classification: &Classification,
    config: &AnalysisConfig,
) -> Result<SectorReport> {
    info!(
        industries = industries.len(),
        anchor = %config.anchor(),
        horizon = config.horizon(),
        "starting sector analysis"
    );

    let categorized = prepare(industries, classification)?;

    let outlooks = analyze_each(&categorized, config)
        .into_iter()
        .map(|(_, outcome)| outcome)
        .collect::<Result<Vec<_>>>()?;

    Ok(SectorReport::new(*config, outlooks))
}
