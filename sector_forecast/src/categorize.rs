//! Partition industries into the four sectors

use crate::classification::{Classification, Sector};
use crate::error::{ForecastError, Result};
use crate::table::IndustryTable;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Split `industries` by sector using substring matching against `classification`.
///
/// An industry whose identifier contains codes from several sectors is placed
/// in every one of them. Industries matching no sector are dropped. All four
/// sectors are present in the output, possibly with empty tables.
pub fn categorize(
    industries: &IndustryTable,
    classification: &Classification,
) -> Result<BTreeMap<Sector, IndustryTable>> {
    if industries.is_empty() {
        return Err(ForecastError::Configuration(
            "Cannot categorize an empty industry table".to_string(),
        ));
    }

    let mut by_sector: BTreeMap<Sector, IndustryTable> = Sector::ALL
        .into_iter()
        .map(|sector| (sector, IndustryTable::new()))
        .collect();

    for (identifier, series) in industries.iter() {
        let sectors = classification.matches(identifier);
        match sectors.len() {
            0 => debug!(industry = identifier, "no sector code matched, dropping"),
            1 => {}
            _ => warn!(
                industry = identifier,
                sectors = ?sectors,
                "industry matched more than one sector"
            ),
        }

        for sector in sectors {
            if let Some(table) = by_sector.get_mut(&sector) {
                table.insert(identifier, series.clone())?;
            }
        }
    }

    Ok(by_sector)
}

/// Identifiers matched by more than one sector, with the sectors they matched
pub fn overlapping(
    industries: &IndustryTable,
    classification: &Classification,
) -> Vec<(String, Vec<Sector>)> {
    industries
        .identifiers()
        .filter_map(|identifier| {
            let sectors = classification.matches(identifier);
            (sectors.len() > 1).then(|| (identifier.to_string(), sectors))
        })
        .collect()
}
