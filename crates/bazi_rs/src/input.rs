//! Validated birth input.

use bazi_base::{BaziError, Gender};
use bazi_time::{BirthMoment, CivilDate, HourBlock};
use serde::{Deserialize, Serialize};

/// Birth data as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    /// Display name carried into the report.
    #[serde(default)]
    pub name: Option<String>,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Two-hour block, 0 (23:00-00:59) to 11 (21:00-22:59).
    pub hour_index: u8,
    pub gender: Gender,
}

impl BirthInput {
    pub fn new(year: i32, month: u32, day: u32, hour_index: u8, gender: Gender) -> Self {
        Self {
            name: None,
            year,
            month,
            day,
            hour_index,
            gender,
        }
    }

    /// Build from a `YYYY-MM-DD` date string.
    pub fn from_date_str(date: &str, hour_index: u8, gender: Gender) -> Result<Self, BaziError> {
        let date: CivilDate = date.parse()?;
        Ok(Self::new(
            date.year(),
            date.month(),
            date.day(),
            hour_index,
            gender,
        ))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validate into a birth moment.
    pub fn moment(&self) -> Result<BirthMoment, BaziError> {
        let date = CivilDate::new(self.year, self.month, self.day)
            .map_err(|_| BaziError::InvalidInput("not a valid calendar date"))?;
        let hour = HourBlock::new(self.hour_index)
            .map_err(|_| BaziError::InvalidInput("hour index must be in 0..=11"))?;
        Ok(BirthMoment { date, hour })
    }
}
