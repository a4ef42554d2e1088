//! Industry and sector tables

use crate::classification::Sector;
use crate::error::{ForecastError, Result};
use crate::series::Series;
use crate::time::TimePoint;
use serde::Serialize;
use std::collections::BTreeMap;

/// Industry identifier -> series
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndustryTable {
    industries: BTreeMap<String, Series>,
}

impl IndustryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an industry. Identifiers must be non-empty.
    pub fn insert(&mut self, identifier: impl Into<String>, series: Series) -> Result<()> {
        let identifier = identifier.into();
        if identifier.trim().is_empty() {
            return Err(ForecastError::Configuration(
                "Industry identifier must not be empty".to_string(),
            ));
        }

        self.industries.insert(identifier, series);
        Ok(())
    }

    /// Check that every industry shares the same time index
    pub fn check_aligned(&self) -> Result<()> {
        let mut iter = self.industries.iter();
        let Some((first_id, first)) = iter.next() else {
            return Ok(());
        };
        let expected: Vec<TimePoint> = first.index();

        for (id, series) in iter {
            if series.index() != expected {
                return Err(ForecastError::InputShape(format!(
                    "Industry '{}' covers {} months from {:?}, but '{}' covers {} months from {:?}",
                    id,
                    series.len(),
                    series.first(),
                    first_id,
                    first.len(),
                    first.first()
                )));
            }
        }

        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Option<&Series> {
        self.industries.get(identifier)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.industries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.industries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.industries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
    }
}

/// Sector -> aggregated series, produced once per run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectorTable {
    sectors: BTreeMap<Sector, Series>,
}

impl SectorTable {
    pub(crate) fn from_map(sectors: BTreeMap<Sector, Series>) -> Self {
        Self { sectors }
    }

    pub fn get(&self, sector: Sector) -> Option<&Series> {
        self.sectors.get(&sector)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sector, &Series)> {
        self.sectors.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(year: i32, month: u32) -> TimePoint {
        TimePoint::new(year, month).unwrap()
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let mut table = IndustryTable::new();
        let series = Series::from_values(tp(2020, 1), vec![1.0]).unwrap();

        assert!(matches!(
            table.insert("  ", series),
            Err(ForecastError::Configuration(_))
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn test_check_aligned() {
        let mut table = IndustryTable::new();
        table
            .insert("A [11]", Series::from_values(tp(2020, 1), vec![1.0, 2.0]).unwrap())
            .unwrap();
        table
            .insert("B [21]", Series::from_values(tp(2020, 1), vec![3.0, 4.0]).unwrap())
            .unwrap();
        assert!(table.check_aligned().is_ok());

        table
            .insert("C [23]", Series::from_values(tp(2020, 2), vec![3.0, 4.0]).unwrap())
            .unwrap();
        assert!(matches!(
            table.check_aligned(),
            Err(ForecastError::InputShape(_))
        ));
    }
}
