//! Calendar months as an ordered time axis

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, ordered by (year, month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, u32)", into = "(i32, u32)")]
pub struct TimePoint {
    year: i32,
    month: u32,
}

impl TimePoint {
    /// Create a new time point. Month must be in 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::Configuration(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }

        Ok(Self { year, month })
    }

    /// For compile-time constants whose month is known to be valid
    pub(crate) const fn from_parts(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month, `None` past the last representable year
    pub fn succ(&self) -> Option<Self> {
        self.checked_advance(1)
    }

    /// Move forward by `months` calendar months, rolling the year at month 13.
    ///
    /// Returns `None` when the year would leave the `i32` range.
    pub fn checked_advance(&self, months: usize) -> Option<Self> {
        let zero_based = i64::try_from(months)
            .ok()?
            .checked_add(self.month as i64 - 1)?;
        let years = i32::try_from(zero_based.div_euclid(12)).ok()?;
        Some(Self {
            year: self.year.checked_add(years)?,
            month: zero_based.rem_euclid(12) as u32 + 1,
        })
    }

    /// Like [`checked_advance`](Self::checked_advance), failing with `InputShape` on overflow
    pub fn advance(&self, months: usize) -> Result<Self> {
        self.checked_advance(months).ok_or_else(|| {
            ForecastError::InputShape(format!(
                "Advancing {} by {} months leaves the supported year range",
                self, months
            ))
        })
    }

    /// Signed number of months from `self` to `other`
    pub fn months_until(&self, other: &TimePoint) -> i64 {
        (other.year as i64 - self.year as i64) * 12 + other.month as i64 - self.month as i64
    }

    /// Parse a long-form label such as `"January 2014"`
    pub fn parse_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        let date = NaiveDate::parse_from_str(&format!("1 {}", trimmed), "%d %B %Y")
            .map_err(|e| ForecastError::Parse(format!("Invalid month label '{}': {}", trimmed, e)))?;
        Ok(Self::from(date))
    }
}

impl From<NaiveDate> for TimePoint {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl TryFrom<(i32, u32)> for TimePoint {
    type Error = ForecastError;

    fn try_from((year, month): (i32, u32)) -> Result<Self> {
        Self::new(year, month)
    }
}

impl From<TimePoint> for (i32, u32) {
    fn from(point: TimePoint) -> Self {
        (point.year, point.month)
    }
}

/// Accepts `YYYY-MM` (or `YYYY-M`)
impl FromStr for TimePoint {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| ForecastError::Parse(format!("Expected YYYY-MM, got '{}'", s)))?;

        let year = year
            .parse::<i32>()
            .map_err(|e| ForecastError::Parse(format!("Invalid year in '{}': {}", s, e)))?;
        let month = month
            .parse::<u32>()
            .map_err(|e| ForecastError::Parse(format!("Invalid month in '{}': {}", s, e)))?;

        Self::new(year, month)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tp(year: i32, month: u32) -> TimePoint {
        TimePoint::new(year, month).unwrap()
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn test_invalid_month(#[case] month: u32) {
        assert!(matches!(
            TimePoint::new(2020, month),
            Err(ForecastError::Configuration(_))
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(tp(2019, 12) < tp(2020, 1));
        assert!(tp(2020, 2) < tp(2020, 3));
        assert_eq!(tp(2020, 2).max(tp(2019, 11)), tp(2020, 2));
    }

    #[rstest]
    #[case(tp(2020, 2), 1, tp(2020, 3))]
    #[case(tp(2020, 12), 1, tp(2021, 1))]
    #[case(tp(2020, 11), 14, tp(2022, 1))]
    #[case(tp(2020, 5), 0, tp(2020, 5))]
    fn test_advance(#[case] start: TimePoint, #[case] months: usize, #[case] expected: TimePoint) {
        assert_eq!(start.advance(months).unwrap(), expected);
    }

    #[rstest]
    #[case(tp(i32::MAX, 12), 1)]
    #[case(tp(i32::MAX, 1), 12)]
    #[case(tp(2020, 1), usize::MAX)]
    fn test_advance_overflow(#[case] start: TimePoint, #[case] months: usize) {
        assert_eq!(start.checked_advance(months), None);
        assert!(matches!(
            start.advance(months),
            Err(ForecastError::InputShape(_))
        ));
    }

    #[test]
    fn test_succ_at_year_limit() {
        assert_eq!(tp(i32::MAX, 11).succ(), Some(tp(i32::MAX, 12)));
        assert_eq!(tp(i32::MAX, 12).succ(), None);
    }

    #[test]
    fn test_months_until() {
        assert_eq!(tp(2019, 2).months_until(&tp(2020, 2)), 12);
        assert_eq!(tp(2020, 3).months_until(&tp(2020, 2)), -1);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(TimePoint::parse_label("January 2014").unwrap(), tp(2014, 1));
        assert_eq!(TimePoint::parse_label(" September 2021 ").unwrap(), tp(2021, 9));
        assert!(TimePoint::parse_label("Smarch 2014").is_err());
    }

    #[test]
    fn test_from_str_and_display() {
        let point: TimePoint = "2020-3".parse().unwrap();
        assert_eq!(point, tp(2020, 3));
        assert_eq!(point.to_string(), "(2020, 3)");
        assert!("2020/03".parse::<TimePoint>().is_err());
        assert!("2020-13".parse::<TimePoint>().is_err());
    }

    #[test]
    fn test_serde_as_pair() {
        assert_eq!(serde_json::to_string(&tp(2020, 3)).unwrap(), "[2020,3]");
        assert_eq!(serde_json::from_str::<TimePoint>("[2019,12]").unwrap(), tp(2019, 12));
        assert!(serde_json::from_str::<TimePoint>("[2019,0]").is_err());
    }
}
