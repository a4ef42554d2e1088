//! Per-sector results handed to presentation code

use crate::classification::Sector;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::pipeline::SectorOutlook;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Outlook for every sector of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorReport {
    pub config: AnalysisConfig,
    pub sectors: BTreeMap<Sector, SectorOutlook>,
}

impl SectorReport {
    pub fn new(config: AnalysisConfig, outlooks: Vec<SectorOutlook>) -> Self {
        Self {
            config,
            sectors: outlooks.into_iter().map(|o| (o.sector, o)).collect(),
        }
    }

    pub fn get(&self, sector: Sector) -> Option<&SectorOutlook> {
        self.sectors.get(&sector)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectorOutlook> {
        self.sectors.values()
    }

    /// Pretty-printed JSON for charting tools
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SectorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Sector outlook: trend through {}, projected {} months",
            self.config.anchor(),
            self.config.horizon()
        )?;

        for outlook in self.iter() {
            writeln!(f)?;
            writeln!(
                f,
                "{}  slope {:.4}  intercept {:.4}  R² {}",
                outlook.sector,
                outlook.model.slope,
                outlook.model.intercept,
                outlook
                    .r_squared
                    .map(|r| format!("{:.4}", r))
                    .unwrap_or_else(|| "n/a".to_string())
            )?;
            writeln!(
                f,
                "  {:<12} {:>14} {:>14} {:>14}",
                "Month", "Projected", "Actual", "Deviation"
            )?;

            let projection = &outlook.projection;
            for (deviation, (time, projected)) in
                projection.deviations.iter().zip(projection.projected.iter())
            {
                let actual = projection
                    .actual
                    .get(*time)
                    .map(|v| format!("{:.2}", v))
                    .unwrap_or_else(|| "n/a".to_string());
                let delta = deviation
                    .value
                    .map(|v| format!("{:+.2}", v))
                    .unwrap_or_else(|| "n/a".to_string());

                writeln!(
                    f,
                    "  {:<12} {:>14.2} {:>14} {:>14}",
                    time.to_string(),
                    projected,
                    actual,
                    delta
                )?;
            }

            write!(f, "{}", outlook.summary)?;
        }

        Ok(())
    }
}
