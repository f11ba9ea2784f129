//! Civil-calendar primitives for Four Pillars chart computation.
//!
//! This crate provides:
//! - Validated proleptic Gregorian dates (`CivilDate`)
//! - Signed day counting against a reference date
//! - The twelve two-hour blocks of the traditional day (`HourBlock`)
//! - `BirthMoment`, the validated (date, block) pair the engine consumes
//!
//! Lunar-calendar conversion and true-solar-time correction are not
//! provided; callers supply solar dates and block indices directly.

pub mod civil_date;
pub mod error;
pub mod hour_block;

use serde::{Deserialize, Serialize};

pub use civil_date::{CivilDate, days_between};
pub use error::TimeError;
pub use hour_block::{ALL_HOUR_BLOCKS, HOUR_BLOCKS_PER_DAY, HourBlock};

/// A validated birth moment: solar date plus two-hour block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthMoment {
    pub date: CivilDate,
    pub hour: HourBlock,
}

impl BirthMoment {
    /// Validate raw calendar parts and a block index (0..=11).
    pub fn new(year: i32, month: u32, day: u32, hour_index: u8) -> Result<Self, TimeError> {
        Ok(Self {
            date: CivilDate::new(year, month, day)?,
            hour: HourBlock::new(hour_index)?,
        })
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_moment_validates_both_parts() {
        assert!(BirthMoment::new(1996, 3, 15, 10).is_ok());
        assert_eq!(
            BirthMoment::new(1996, 3, 15, 12),
            Err(TimeError::InvalidHourBlock(12))
        );
        assert!(matches!(
            BirthMoment::new(1996, 2, 30, 0),
            Err(TimeError::InvalidDate { .. })
        ));
    }

    #[test]
    fn birth_moment_year() {
        let m = BirthMoment::new(1984, 2, 4, 0).unwrap();
        assert_eq!(m.year(), 1984);
        assert_eq!(m.hour.index(), 0);
    }
}
