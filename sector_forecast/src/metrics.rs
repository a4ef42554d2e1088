//! Summary metrics over a projection's deviations

use crate::projection::ProjectionResult;
use serde::{Deserialize, Serialize};

/// How far the observed months strayed from the counterfactual trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationSummary {
    /// Projected months
    pub months: usize,
    /// Projected months with an observation to compare against
    pub available: usize,
    /// Sum of observed minus projected
    pub total: f64,
    /// Mean signed deviation
    pub mean: Option<f64>,
    /// Mean absolute deviation
    pub mean_absolute: Option<f64>,
    /// Total deviation as a percentage of the projected total over the same months
    pub percent_of_projection: Option<f64>,
}

impl DeviationSummary {
    pub fn from_projection(projection: &ProjectionResult) -> Self {
        let compared: Vec<(f64, f64)> = projection
            .deviations
            .iter()
            .filter_map(|d| {
                let projected = projection.projected.get(d.time)?;
                d.value.map(|deviation| (deviation, projected))
            })
            .collect();

        let available = compared.len();
        let total: f64 = compared.iter().map(|(d, _)| d).sum();
        let projected_total: f64 = compared.iter().map(|(_, p)| p).sum();

        let (mean, mean_absolute) = if available > 0 {
            let n = available as f64;
            (
                Some(total / n),
                Some(compared.iter().map(|(d, _)| d.abs()).sum::<f64>() / n),
            )
        } else {
            (None, None)
        };

        let percent_of_projection = if projected_total.abs() > 1e-10 {
            Some(total / projected_total * 100.0)
        } else {
            None
        };

        Self {
            months: projection.deviations.len(),
            available,
            total,
            mean,
            mean_absolute,
            percent_of_projection,
        }
    }
}

fn or_na(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "n/a".to_string())
}

impl std::fmt::Display for DeviationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Deviation Summary:")?;
        writeln!(f, "  Months:     {} ({} observed)", self.months, self.available)?;
        writeln!(f, "  Total:      {:.2}", self.total)?;
        writeln!(f, "  Mean:       {}", or_na(self.mean, 2))?;
        writeln!(f, "  Mean Abs:   {}", or_na(self.mean_absolute, 2))?;
        writeln!(
            f,
            "  Relative:   {}%",
            or_na(self.percent_of_projection, 2)
        )?;
        Ok(())
    }
}
