//! Yearly dimension scoring.
//!
//! ```text
//! total = clamp(60 + luck + year + age + seed, 30, 95)
//! seed  = (age * 7 + codepoint(annual stem)) mod 20 - 10
//! ```
//!
//! The five satellite dimensions offset `total` by a truncated remainder
//! of the seed, so a negative seed gives a negative remainder.

use crate::balance::Strength;
use crate::element::Element;
use crate::sexagenary::Pillar;
use crate::stem::Stem;

use super::types::{DimensionScores, LuckLabel};

const BASE_SCORE: i32 = 60;

/// Everything a year's scores depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreInputs {
    pub day_element: Element,
    pub strength: Strength,
    pub luck: LuckLabel,
    pub annual: Pillar,
    pub age: u32,
}

/// Bonus from the active luck pillar's stem element.
pub fn luck_bonus(strength: Strength, day_element: Element, luck: LuckLabel) -> i32 {
    let Some(pillar) = luck.pillar() else {
        return 0;
    };
    let same = pillar.stem().element() == day_element;
    match strength {
        Strength::Strong if same => -3,
        Strength::Strong => 5,
        Strength::Weak if same => 8,
        Strength::Weak => 0,
        Strength::Balanced => 3,
    }
}

/// Bonus from the annual stem's element.
pub fn year_bonus(strength: Strength, day_element: Element, annual_element: Element) -> i32 {
    match strength {
        Strength::Strong if annual_element != day_element => 4,
        Strength::Weak if annual_element == day_element => 5,
        _ => 0,
    }
}

/// +5 for ages 25..=45, -3 from 60 on.
pub fn age_bonus(age: u32) -> i32 {
    let mut bonus = 0;
    if (25..=45).contains(&age) {
        bonus += 5;
    }
    if age >= 60 {
        bonus -= 3;
    }
    bonus
}

/// Deterministic per-year seed in -10..=9.
pub fn year_seed(age: u32, annual_stem: Stem) -> i32 {
    let raw = (i64::from(age) * 7 + i64::from(u32::from(annual_stem.symbol()))) % 20;
    raw as i32 - 10
}

/// Score the six dimensions for one year.
pub fn score_year(inputs: &ScoreInputs) -> DimensionScores {
    let seed = year_seed(inputs.age, inputs.annual.stem());
    let total = (BASE_SCORE
        + luck_bonus(inputs.strength, inputs.day_element, inputs.luck)
        + year_bonus(
            inputs.strength,
            inputs.day_element,
            inputs.annual.stem().element(),
        )
        + age_bonus(inputs.age)
        + seed)
        .clamp(30, 95);
    let age = inputs.age as i32;

    DimensionScores {
        total,
        wealth: (total + seed % 7 - 3).clamp(25, 95),
        career: (total + (seed + 3) % 8 - 4).clamp(25, 95),
        marriage: (total + (seed + 5) % 6 - 2).clamp(25, 95),
        family: (total + (seed + 2) % 5).clamp(30, 95),
        health: (total - age / 15 + seed % 4).clamp(20, 95),
    }
}
