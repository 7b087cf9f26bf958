//! Calendar month period
//!
//! A validated (year, month) pair. The dashboard and the aggregation engine
//! operate on one month at a time, so the month range check and the
//! Gregorian day-count logic live here rather than being repeated at every
//! call site.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month within a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodRepr", into = "PeriodRepr")]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

/// Serialized form; deserialization re-validates the month range
#[derive(Serialize, Deserialize)]
struct PeriodRepr {
    year: i32,
    month: u32,
}

impl TryFrom<PeriodRepr> for MonthPeriod {
    type Error = InvalidPeriodError;

    fn try_from(repr: PeriodRepr) -> Result<Self, Self::Error> {
        MonthPeriod::new(repr.year, repr.month)
    }
}

impl From<MonthPeriod> for PeriodRepr {
    fn from(period: MonthPeriod) -> Self {
        Self {
            year: period.year,
            month: period.month,
        }
    }
}

impl MonthPeriod {
    /// Create a period, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidPeriodError> {
        if !(1..=12).contains(&month) {
            return Err(InvalidPeriodError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Get the period containing today's date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Get the period containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Last day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_first.expect("validated month") - Duration::days(1)
    }

    /// Number of days in this month (28-31, leap-year aware)
    pub fn day_count(&self) -> u32 {
        self.last_day().day()
    }

    /// The date of the given 1-based day, if it exists in this month
    pub fn date_of_day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Human-readable label, e.g. "Mar/2024"
    pub fn label(&self) -> String {
        format!("{}/{}", MONTH_ABBREV[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthPeriod {
    type Err = InvalidPeriodError;

    /// Parse "YYYY-MM" or "MM/YYYY"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year_str, month_str) = if let Some((y, m)) = s.split_once('-') {
            (y, m)
        } else if let Some((m, y)) = s.split_once('/') {
            (y, m)
        } else {
            return Err(InvalidPeriodError::InvalidFormat(s.to_string()));
        };

        let year: i32 = year_str
            .parse()
            .map_err(|_| InvalidPeriodError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| InvalidPeriodError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

/// Error type for period construction and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPeriodError {
    MonthOutOfRange(u32),
    InvalidFormat(String),
}

impl fmt::Display for InvalidPeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthOutOfRange(m) => write!(f, "Month must be between 1 and 12, got {}", m),
            Self::InvalidFormat(s) => {
                write!(f, "Invalid period format: '{}'. Use YYYY-MM or MM/YYYY", s)
            }
        }
    }
}

impl std::error::Error for InvalidPeriodError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_month() {
        assert!(MonthPeriod::new(2024, 1).is_ok());
        assert!(MonthPeriod::new(2024, 12).is_ok());
        assert_eq!(
            MonthPeriod::new(2024, 0),
            Err(InvalidPeriodError::MonthOutOfRange(0))
        );
        assert_eq!(
            MonthPeriod::new(2024, 13),
            Err(InvalidPeriodError::MonthOutOfRange(13))
        );
    }

    #[test]
    fn test_day_count() {
        assert_eq!(MonthPeriod::new(2024, 1).unwrap().day_count(), 31);
        assert_eq!(MonthPeriod::new(2024, 2).unwrap().day_count(), 29); // leap year
        assert_eq!(MonthPeriod::new(2023, 2).unwrap().day_count(), 28);
        assert_eq!(MonthPeriod::new(2024, 4).unwrap().day_count(), 30);
        assert_eq!(MonthPeriod::new(2024, 12).unwrap().day_count(), 31);
    }

    #[test]
    fn test_century_leap_rules() {
        assert_eq!(MonthPeriod::new(2000, 2).unwrap().day_count(), 29);
        assert_eq!(MonthPeriod::new(1900, 2).unwrap().day_count(), 28);
    }

    #[test]
    fn test_contains() {
        let period = MonthPeriod::new(2024, 3).unwrap();
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "2024-03".parse::<MonthPeriod>().unwrap(),
            MonthPeriod::new(2024, 3).unwrap()
        );
        assert_eq!(
            "03/2024".parse::<MonthPeriod>().unwrap(),
            MonthPeriod::new(2024, 3).unwrap()
        );
        assert!("2024-13".parse::<MonthPeriod>().is_err());
        assert!("march".parse::<MonthPeriod>().is_err());
    }

    #[test]
    fn test_display_and_label() {
        let period = MonthPeriod::new(2024, 3).unwrap();
        assert_eq!(period.to_string(), "2024-03");
        assert_eq!(period.label(), "Mar/2024");
    }

    #[test]
    fn test_serde_rejects_invalid_month() {
        let json = r#"{"year":2024,"month":13}"#;
        assert!(serde_json::from_str::<MonthPeriod>(json).is_err());

        let valid = r#"{"year":2024,"month":3}"#;
        let period: MonthPeriod = serde_json::from_str(valid).unwrap();
        assert_eq!(period, MonthPeriod::new(2024, 3).unwrap());
    }
}
