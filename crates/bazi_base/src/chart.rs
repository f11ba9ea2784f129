//! Four Pillars chart computation from a solar date and hour block.
//!
//! Approximations, kept for reproducibility of existing reports:
//! - The year changes on February 4 rather than at the exact Lichun
//!   solar term.
//! - Months change on day 6 of each civil month rather than at the
//!   exact Jie solar terms.
//! - The day pillar counts civil days from 1900-01-31 (甲辰) with no
//!   true-solar-time correction.

use bazi_time::{BirthMoment, CivilDate, HourBlock};
use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::BaziError;
use crate::sexagenary::Pillar;
use crate::stem::Stem;

/// Gregorian year whose pillar is 甲子 (cycle position 0).
pub const CYCLE_ANCHOR_YEAR: i32 = 1984;

/// Day number (0001-01-01 = 1) of 1900-01-31, the day-counting reference.
pub const DAY_EPOCH_DAYS_FROM_CE: i64 = 693_626;

/// Cycle position of the reference date (甲辰).
pub const DAY_EPOCH_INDEX: i64 = 40;

/// Civil day of the month on which the month pillar changes.
pub const MONTH_CHANGE_DAY: u32 = 6;

/// First month stem for each pair of year stems (甲己, 乙庚, 丙辛, 丁壬, 戊癸).
const MONTH_STEM_START: [u8; 5] = [2, 4, 6, 8, 0];

/// First hour stem for each pair of day stems.
const HOUR_STEM_START: [u8; 5] = [0, 2, 4, 6, 8];

/// One of the four pillar slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    /// Chinese label (年柱, 月柱, 日柱, 时柱).
    pub const fn chinese_name(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }
}

/// A complete Four Pillars chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Chart {
    pub const fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The day stem, the "self" every relation is measured against.
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Compute the chart for raw calendar parts and an hour block (0..=11).
pub fn compute_chart(year: i32, month: u32, day: u32, hour_index: u8) -> Result<Chart, BaziError> {
    let date = CivilDate::new(year, month, day)
        .map_err(|_| BaziError::InvalidInput("not a valid calendar date"))?;
    let hour = HourBlock::new(hour_index)
        .map_err(|_| BaziError::InvalidInput("hour index must be in 0..=11"))?;
    Ok(chart_for(&BirthMoment { date, hour }))
}

/// Compute the chart for an already-validated birth moment.
pub fn chart_for(moment: &BirthMoment) -> Chart {
    let year = year_pillar(&moment.date);
    let month = month_pillar(&moment.date, year.stem());
    let day = day_pillar(&moment.date);
    let hour = hour_pillar(day.stem(), moment.hour);
    Chart {
        year,
        month,
        day,
        hour,
    }
}

/// Year pillar with the February 4 cutoff applied.
pub fn year_pillar(date: &CivilDate) -> Pillar {
    let before_cutoff = date.month() < 2 || (date.month() == 2 && date.day() < 4);
    let year = if before_cutoff {
        date.year() - 1
    } else {
        date.year()
    };
    annual_pillar(year)
}

/// Pillar of a calendar year, with no cutoff (the yearly "flowing" pillar).
pub fn annual_pillar(year: i32) -> Pillar {
    Pillar::from_cycle_index(i64::from(year) - i64::from(CYCLE_ANCHOR_YEAR))
}

/// Month pillar; `year_stem` is the stem of the cutoff-adjusted year pillar.
pub fn month_pillar(date: &CivilDate, year_stem: Stem) -> Pillar {
    let mut month = date.month();
    if date.day() < MONTH_CHANGE_DAY {
        month = if month == 1 { 12 } else { month - 1 };
    }
    let start = MONTH_STEM_START[(year_stem.index() / 2) as usize];
    let stem = Stem::from_index(i64::from(start) + i64::from(month) - 1);
    // month 1 falls in 寅
    let branch = Branch::from_index(i64::from(month) + 1);
    Pillar::from_cycle_index(pair_index(stem, branch))
}

/// Day pillar by civil day count from 1900-01-31.
pub fn day_pillar(date: &CivilDate) -> Pillar {
    let offset = date.days_from_ce() - DAY_EPOCH_DAYS_FROM_CE;
    Pillar::from_cycle_index(offset.rem_euclid(60) + DAY_EPOCH_INDEX)
}

/// Hour pillar: branch is the block index, stem follows the day stem.
pub fn hour_pillar(day_stem: Stem, hour: HourBlock) -> Pillar {
    let start = HOUR_STEM_START[(day_stem.index() / 2) as usize];
    let stem = Stem::from_index(i64::from(start) + i64::from(hour.index()));
    let branch = Branch::from_index(i64::from(hour.index()));
    Pillar::from_cycle_index(pair_index(stem, branch))
}

fn pair_index(stem: Stem, branch: Branch) -> i64 {
    6 * i64::from(stem.index()) - 5 * i64::from(branch.index())
}
