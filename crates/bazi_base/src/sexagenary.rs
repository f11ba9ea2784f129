//! The sexagenary (60-position) stem-branch cycle.
//!
//! Position `i` pairs stem `i mod 10` with branch `i mod 12`. Only stems
//! and branches of equal parity ever meet, so 60 of the 120 combinations
//! are valid pillars. Position 0 is 甲子.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::BaziError;
use crate::stem::Stem;

/// Length of the stem-branch cycle.
pub const CYCLE_LEN: u8 = 60;

/// A valid stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

/// All 60 pillars in cycle order (index 0 = 甲子, 59 = 癸亥).
pub const SEXAGENARY_CYCLE: [Pillar; 60] = build_cycle();

const fn build_cycle() -> [Pillar; 60] {
    let mut out = [Pillar {
        stem: Stem::Jia,
        branch: Branch::Zi,
    }; 60];
    let mut i = 0;
    while i < 60 {
        out[i] = Pillar {
            stem: Stem::from_index(i as i64),
            branch: Branch::from_index(i as i64),
        };
        i += 1;
    }
    out
}

impl Pillar {
    /// Pair a stem with a branch. Fails when their parities differ.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, BaziError> {
        if stem.index() % 2 == branch.index() % 2 {
            Ok(Self { stem, branch })
        } else {
            Err(BaziError::InvalidPillar(format!(
                "{}{}",
                stem.symbol(),
                branch.symbol()
            )))
        }
    }

    /// Pillar at a cycle position; any integer is reduced mod 60.
    pub const fn from_cycle_index(index: i64) -> Self {
        SEXAGENARY_CYCLE[index.rem_euclid(CYCLE_LEN as i64) as usize]
    }

    /// 0-based position in the cycle (甲子=0 .. 癸亥=59).
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(CYCLE_LEN as i32) as u8
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Pillar `steps` positions later in the cycle (negative goes back).
    pub const fn advance(self, steps: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + steps)
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl FromStr for Pillar {
    type Err = BaziError;

    /// Parse the two-character form, e.g. `"甲子"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BaziError::InvalidPillar(text.to_string()));
        };
        match (Stem::from_symbol(sc), Branch::from_symbol(bc)) {
            (Some(stem), Some(branch)) => Self::new(stem, branch),
            _ => Err(BaziError::InvalidPillar(text.to_string())),
        }
    }
}

impl TryFrom<String> for Pillar {
    type Error = BaziError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pillar> for String {
    fn from(value: Pillar) -> Self {
        value.to_string()
    }
}
