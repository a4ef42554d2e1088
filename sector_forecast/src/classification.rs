//! The four-sector scheme and its industry code table
//!
//! Industry identifiers carry a bracketed NAICS code, e.g.
//! `"Construction [23]"`. An identifier belongs to a sector when it contains
//! any of that sector's code strings.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Broad economic sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sector {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
}

impl Sector {
    /// Every sector, in classification order
    pub const ALL: [Sector; 4] = [
        Sector::Primary,
        Sector::Secondary,
        Sector::Tertiary,
        Sector::Quaternary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sector::Primary => "Primary",
            Sector::Secondary => "Secondary",
            Sector::Tertiary => "Tertiary",
            Sector::Quaternary => "Quaternary",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sector {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ForecastError::Parse(format!("Unknown sector '{}'", s)))
    }
}

// Resources and extraction
const PRIMARY_CODES: &[&str] = &["[11]", "[21]"];
// Utilities, construction and manufacturing
const SECONDARY_CODES: &[&str] = &["[22]", "[23]", "[31-33]"];
// Trade, transport, real estate and consumer services
const TERTIARY_CODES: &[&str] = &[
    "[41]", "[44-45]", "[48-49]", "[53]", "[56]", "[71]", "[72]", "[81]",
];
// Information, finance, professional services, education, health, public administration
const QUATERNARY_CODES: &[&str] = &["[51]", "[52]", "[54]", "[55]", "[61]", "[62]", "[91]"];

/// Code-substring sets for each sector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    codes: BTreeMap<Sector, Vec<String>>,
}

impl Classification {
    /// The fixed NAICS table
    pub fn standard() -> Self {
        let table = [
            (Sector::Primary, PRIMARY_CODES),
            (Sector::Secondary, SECONDARY_CODES),
            (Sector::Tertiary, TERTIARY_CODES),
            (Sector::Quaternary, QUATERNARY_CODES),
        ];

        Self {
            codes: table
                .into_iter()
                .map(|(sector, codes)| (sector, codes.iter().map(|c| c.to_string()).collect()))
                .collect(),
        }
    }

    /// Build a table from custom code sets.
    ///
    /// Every sector needs at least one code, and no code may be blank.
    pub fn new<I, S>(sets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Sector, Vec<S>)>,
        S: Into<String>,
    {
        let mut codes: BTreeMap<Sector, Vec<String>> = BTreeMap::new();
        for (sector, set) in sets {
            codes
                .entry(sector)
                .or_default()
                .extend(set.into_iter().map(Into::into));
        }

        for sector in Sector::ALL {
            match codes.get(&sector) {
                None => {
                    return Err(ForecastError::Configuration(format!(
                        "No classification codes given for the {} sector",
                        sector
                    )))
                }
                Some(set) if set.is_empty() => {
                    return Err(ForecastError::Configuration(format!(
                        "Classification code set for the {} sector is empty",
                        sector
                    )))
                }
                Some(set) if set.iter().any(|c| c.trim().is_empty()) => {
                    return Err(ForecastError::Configuration(format!(
                        "Classification code set for the {} sector contains a blank code",
                        sector
                    )))
                }
                Some(_) => {}
            }
        }

        Ok(Self { codes })
    }

    /// Codes for one sector
    pub fn codes(&self, sector: Sector) -> &[String] {
        self.codes.get(&sector).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every sector whose code set has a member contained in `identifier`,
    /// in classification order.
    pub fn matches(&self, identifier: &str) -> Vec<Sector> {
        Sector::ALL
            .into_iter()
            .filter(|sector| {
                self.codes(*sector)
                    .iter()
                    .any(|code| identifier.contains(code.as_str()))
            })
            .collect()
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::standard()
    }
}
