//! # Sector Outlook
//!
//! `sector_outlook` bundles the workspace crates behind one dependency:
//! [`trend_math`] for the least-squares kernel and [`sector_forecast`] for
//! the sector pipeline built on it.
//!
//! ## Example
//!
//! ```
//! use sector_outlook::{fit, project, Series, TimePoint};
//!
//! let start = TimePoint::new(2019, 12).unwrap();
//! let series = Series::from_values(start, vec![0.0, 2.0, 4.0, 0.0, 0.0, 0.0]).unwrap();
//! let anchor = TimePoint::new(2020, 2).unwrap();
//!
//! let model = fit(&series, anchor).unwrap();
//! let outlook = project(&series, anchor, &model, 3).unwrap();
//! assert_eq!(outlook.projected.values(), vec![4.0, 6.0, 8.0]);
//! ```

pub use sector_forecast::*;
pub use trend_math;
