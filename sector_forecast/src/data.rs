//! Loading industry output tables from delimited text
//!
//! The expected layout is the statistics-agency export: a few title rows, a
//! header row whose cells after the first are month labels (`"January 2014"`),
//! then one row per industry with the identifier in the first cell, followed
//! by footnote rows.

use crate::error::{ForecastError, Result};
use crate::series::Series;
use crate::table::IndustryTable;
use crate::time::TimePoint;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Loader for industry output tables
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load an industry table from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<IndustryTable> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading industry table");
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load an industry table from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<IndustryTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let rows = csv_reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect::<Vec<_>>()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Self::from_rows(&rows)
    }

    /// Build an industry table from a zero-based grid of cells
    pub fn from_rows(rows: &[Vec<String>]) -> Result<IndustryTable> {
        let (header_row, dates) = rows
            .iter()
            .enumerate()
            .find_map(|(i, row)| month_header(row).map(|dates| (i, dates)))
            .ok_or_else(|| {
                ForecastError::InputShape("No row of month labels found in table".to_string())
            })?;

        debug!(
            row = header_row,
            months = dates.len(),
            first = ?dates.first(),
            "found month header"
        );

        let mut table = IndustryTable::new();

        for (i, row) in rows.iter().enumerate().skip(header_row + 1) {
            let Some(identifier) = row.first().map(|c| c.trim()).filter(|c| !c.is_empty()) else {
                continue;
            };

            let Some(cells) = row.get(1..=dates.len()) else {
                debug!(row = i, identifier, "row shorter than header, skipping");
                continue;
            };

            let values = match cells.iter().map(|c| clean_number(c)).collect::<Result<Vec<_>>>() {
                Ok(values) => values,
                Err(e) => {
                    debug!(row = i, identifier, error = %e, "non-numeric row, skipping");
                    continue;
                }
            };

            let series = Series::new(dates.iter().copied().zip(values).collect())?;
            if table.get(identifier).is_some() {
                warn!(identifier, "duplicate industry identifier, keeping the last row");
            }
            table.insert(identifier, series)?;
        }

        if table.is_empty() {
            warn!("no industry rows found after the month header");
        }

        table.check_aligned()?;
        info!(industries = table.len(), months = dates.len(), "loaded industry table");

        Ok(table)
    }
}

/// Month labels of a header row, if every non-trailing cell after the first is one
fn month_header(row: &[String]) -> Option<Vec<TimePoint>> {
    let mut cells: Vec<&str> = row.iter().skip(1).map(|c| c.trim()).collect();
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }

    if cells.is_empty() {
        return None;
    }

    cells
        .into_iter()
        .map(|c| TimePoint::parse_label(c).ok())
        .collect()
}

/// Parse a numeric cell, dropping thousands separators, quotes and spaces
pub fn clean_number(cell: &str) -> Result<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| !matches!(c, ',' | '"' | ' ' | '\u{a0}'))
        .collect();

    if cleaned.is_empty() {
        return Err(ForecastError::Parse("Empty numeric cell".to_string()));
    }

    cleaned
        .parse::<f64>()
        .map_err(|e| ForecastError::Parse(format!("Invalid number '{}': {}", cell, e)))
}
