//! Validated civil (proleptic Gregorian) calendar dates.
//!
//! `CivilDate` is the canonical birth-date representation used by the
//! pillar calculator. Construction validates the date, so every value
//! in circulation is a real calendar day.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// A validated solar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CivilDate {
    date: NaiveDate,
}

impl CivilDate {
    /// Validate and build a date from its parts.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self { date })
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Signed number of whole days from `origin` to `self`.
    pub fn days_since(&self, origin: &CivilDate) -> i64 {
        days_between(origin, self)
    }

    /// Date shifted by a signed number of days, if still representable.
    pub fn offset_days(&self, days: i64) -> Option<Self> {
        chrono::TimeDelta::try_days(days)
            .and_then(|delta| self.date.checked_add_signed(delta))
            .map(|date| Self { date })
    }

    /// Day number counting 0001-01-01 as day 1.
    pub fn days_from_ce(&self) -> i64 {
        i64::from(self.date.num_days_from_ce())
    }

    /// Underlying chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.date
    }
}

/// Signed number of whole days from `from` to `to`.
pub fn days_between(from: &CivilDate, to: &CivilDate) -> i64 {
    to.date.signed_duration_since(from.date).num_days()
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeError::Parse(s.to_string()));
        };
        let year = y.parse().map_err(|_| TimeError::Parse(s.to_string()))?;
        let month = m.parse().map_err(|_| TimeError::Parse(s.to_string()))?;
        let day = d.parse().map_err(|_| TimeError::Parse(s.to_string()))?;
        Self::new(year, month, day)
    }
}

impl TryFrom<String> for CivilDate {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CivilDate> for String {
    fn from(value: CivilDate) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_date_parts() {
        let d = CivilDate::new(1996, 3, 15).unwrap();
        assert_eq!(d.year(), 1996);
        assert_eq!(d.month(), 3);
        assert_eq!(d.day(), 15);
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            CivilDate::new(2023, 2, 29),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 4, 31).is_err());
        assert!(CivilDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn day_difference_is_signed() {
        let a = CivilDate::new(1900, 1, 31).unwrap();
        let b = CivilDate::new(1900, 2, 1).unwrap();
        assert_eq!(b.days_since(&a), 1);
        assert_eq!(a.days_since(&b), -1);
        assert_eq!(days_between(&a, &a), 0);
    }

    #[test]
    fn day_number_matches_difference() {
        let a = CivilDate::new(1900, 1, 31).unwrap();
        let b = CivilDate::new(1996, 3, 15).unwrap();
        assert_eq!(a.days_from_ce(), 693_626);
        assert_eq!(b.days_from_ce() - a.days_from_ce(), b.days_since(&a));
    }

    #[test]
    fn day_difference_crosses_leap_day() {
        let a = CivilDate::new(2000, 2, 28).unwrap();
        let b = CivilDate::new(2000, 3, 1).unwrap();
        assert_eq!(b.days_since(&a), 2);
    }

    #[test]
    fn offset_round_trip() {
        let a = CivilDate::new(1996, 3, 15).unwrap();
        let b = a.offset_days(60).unwrap();
        assert_eq!(b.to_string(), "1996-05-14");
        assert_eq!(b.days_since(&a), 60);
    }

    #[test]
    fn display_and_parse() {
        let d: CivilDate = "1996-03-15".parse().unwrap();
        assert_eq!(d.to_string(), "1996-03-15");
        assert!("1996/03/15".parse::<CivilDate>().is_err());
        assert!("1996-02-30".parse::<CivilDate>().is_err());
    }
}
