//! Sum industry series into one series per sector

use crate::classification::Sector;
use crate::error::{ForecastError, Result};
use crate::series::Series;
use crate::table::{IndustryTable, SectorTable};
use std::collections::BTreeMap;
use tracing::debug;

/// Sum every industry in `industries` month by month.
///
/// Series are added position by position; the time index is taken from the
/// first industry in the table. Fails on an empty table or ragged lengths.
pub fn aggregate_sector(sector: Sector, industries: &IndustryTable) -> Result<Series> {
    let mut iter = industries.iter();
    let Some((first_id, representative)) = iter.next() else {
        return Err(ForecastError::InputShape(format!(
            "The {} sector has no industries to aggregate",
            sector
        )));
    };

    let mut totals = representative.values();

    for (id, series) in iter {
        if series.len() != totals.len() {
            return Err(ForecastError::InputShape(format!(
                "Cannot aggregate the {} sector: '{}' has {} months but '{}' has {}",
                sector,
                id,
                series.len(),
                first_id,
                totals.len()
            )));
        }

        for (total, (_, value)) in totals.iter_mut().zip(series.iter()) {
            *total += value;
        }
    }

    debug!(
        sector = %sector,
        industries = industries.len(),
        months = totals.len(),
        "aggregated sector"
    );

    Series::new(
        representative
            .index()
            .into_iter()
            .zip(totals)
            .collect(),
    )
}

/// Aggregate every sector of a categorized table
pub fn aggregate(categorized: &BTreeMap<Sector, IndustryTable>) -> Result<SectorTable> {
    let sectors = categorized
        .iter()
        .map(|(sector, industries)| {
            aggregate_sector(*sector, industries)
                .map(|series| (*sector, series))
                .map_err(|e| e.in_sector(*sector))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(SectorTable::from_map(sectors))
}
