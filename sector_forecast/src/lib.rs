//! # Sector Forecast
//!
//! Counterfactual sector projections from a monthly industry output table.
//!
//! ## Features
//!
//! - Loading of agency-style CSV exports into aligned industry series
//! - Grouping of industries into the Primary, Secondary, Tertiary and
//!   Quaternary sectors by their NAICS code
//! - A least-squares trend over each sector's history up to an anchor month
//! - Projection of that trend over the months after the anchor, with the
//!   signed deviation of observed output from the projection
//!
//! ## Quick Start
//!
//! ```rust
//! use sector_forecast::{analyze, AnalysisConfig, Classification, IndustryTable, Series, TimePoint};
//!
//! let start = TimePoint::new(2019, 12)?;
//! let mut industries = IndustryTable::new();
//! for (name, values) in [
//!     ("Mining [21]", vec![10.0, 11.0, 12.0, 9.0, 9.0, 10.0]),
//!     ("Manufacturing [31-33]", vec![20.0, 21.0, 22.0, 15.0, 16.0, 18.0]),
//!     ("Retail trade [44-45]", vec![30.0, 30.0, 30.0, 20.0, 24.0, 28.0]),
//!     ("Finance and insurance [52]", vec![40.0, 42.0, 44.0, 44.0, 45.0, 47.0]),
//! ] {
//!     industries.insert(name, Series::from_values(start, values)?)?;
//! }
//!
//! let report = analyze(&industries, &Classification::standard(), &AnalysisConfig::default())?;
//! println!("{}", report);
//! # Ok::<(), sector_forecast::ForecastError>(())
//! ```

pub mod aggregate;
pub mod categorize;
pub mod classification;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod projection;
pub mod report;
pub mod series;
pub mod table;
pub mod time;

// Re-export commonly used types
pub use crate::aggregate::{aggregate, aggregate_sector};
pub use crate::categorize::{categorize, overlapping};
pub use crate::classification::{Classification, Sector};
pub use crate::config::AnalysisConfig;
pub use crate::data::DataLoader;
pub use crate::error::{ForecastError, Result};
pub use crate::metrics::DeviationSummary;
pub use crate::models::{fit, TrendModel};
pub use crate::pipeline::{analyze, analyze_each, analyze_sector, prepare, SectorOutlook};
pub use crate::projection::{deviations, project, Deviation, ProjectionResult};
pub use crate::report::SectorReport;
pub use crate::series::Series;
pub use crate::table::{IndustryTable, SectorTable};
pub use crate::time::TimePoint;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
