//! Core types for luck-cycle scheduling.

use serde::{Deserialize, Serialize};

use crate::sexagenary::Pillar;

/// Age at which the first luck pillar begins.
pub const ONSET_AGE: u32 = 3;

/// Number of luck pillars in a cycle.
pub const LUCK_PILLAR_COUNT: usize = 8;

/// Span of one luck pillar in years.
pub const LUCK_PILLAR_YEARS: u32 = 10;

/// Gender of the native; decides luck direction together with the year stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Chinese label (男, 女).
    pub const fn chinese_name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = crate::error::BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(crate::error::BaziError::InvalidInput(
                "gender must be male or female",
            )),
        }
    }
}

/// Direction the luck pillars step through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuckDirection {
    Forward,
    Reverse,
}

impl LuckDirection {
    /// Step applied to the cycle index per luck pillar.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Reverse => "Reverse",
        }
    }

    /// Chinese label (顺行, 逆行).
    pub const fn chinese_name(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Reverse => "逆行",
        }
    }
}

/// A single ten-year luck pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LuckPillar {
    /// 1-indexed position in the cycle.
    pub order: u8,
    pub pillar: Pillar,
    /// First age covered, inclusive.
    pub start_age: u32,
    /// Last age covered, inclusive.
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
}

impl LuckPillar {
    /// Whether `age` falls inside this pillar.
    pub const fn covers_age(&self, age: u32) -> bool {
        self.start_age <= age && age <= self.end_age
    }
}

/// The full luck cycle of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckCycle {
    pub direction: LuckDirection,
    pub onset_age: u32,
    pub pillars: Vec<LuckPillar>,
}

impl LuckCycle {
    /// Luck pillar covering `age`, or `None` before onset and after the last.
    pub fn active_at(&self, age: u32) -> Option<&LuckPillar> {
        self.pillars.iter().find(|p| p.covers_age(age))
    }

    /// Luck pillar in force in calendar `year`, counting the birth year
    /// as age 1.
    pub fn current(&self, birth_year: i32, year: i32) -> Option<&LuckPillar> {
        let age = i64::from(year) - i64::from(birth_year) + 1;
        u32::try_from(age).ok().and_then(|a| self.active_at(a))
    }
}
