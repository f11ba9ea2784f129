//! Timeline data types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaziError;
use crate::locale::Locale;
use crate::luck::{LuckCycle, LuckPillar};
use crate::sexagenary::Pillar;

/// Number of yearly points in a timeline (ages 1..=80).
pub const TIMELINE_YEARS: u32 = 80;

/// Label for the luck period in force at an age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LuckLabel {
    /// Before the first luck pillar begins (童限).
    PreOnset,
    Pillar(Pillar),
}

impl LuckLabel {
    pub const PRE_ONSET_ZH: &'static str = "童限";
    pub const PRE_ONSET_EN: &'static str = "Childhood";

    pub const fn pillar(self) -> Option<Pillar> {
        match self {
            Self::PreOnset => None,
            Self::Pillar(p) => Some(p),
        }
    }

    /// Label text in the requested language. Pillars always render as
    /// their two characters.
    pub fn text(self, locale: Locale) -> String {
        match (self, locale) {
            (Self::PreOnset, Locale::Zh) => Self::PRE_ONSET_ZH.to_string(),
            (Self::PreOnset, Locale::En) => Self::PRE_ONSET_EN.to_string(),
            (Self::Pillar(p), _) => p.to_string(),
        }
    }
}

impl From<Option<&LuckPillar>> for LuckLabel {
    fn from(value: Option<&LuckPillar>) -> Self {
        value.map_or(Self::PreOnset, |lp| Self::Pillar(lp.pillar))
    }
}

impl fmt::Display for LuckLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreOnset => f.write_str(Self::PRE_ONSET_ZH),
            Self::Pillar(p) => write!(f, "{p}"),
        }
    }
}

impl FromStr for LuckLabel {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == Self::PRE_ONSET_ZH || s.eq_ignore_ascii_case(Self::PRE_ONSET_EN) {
            Ok(Self::PreOnset)
        } else {
            s.parse().map(Self::Pillar)
        }
    }
}

impl TryFrom<String> for LuckLabel {
    type Error = BaziError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LuckLabel> for String {
    fn from(value: LuckLabel) -> Self {
        value.to_string()
    }
}

/// Scores for the six life dimensions of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DimensionScores {
    pub total: i32,
    pub wealth: i32,
    pub career: i32,
    pub marriage: i32,
    pub family: i32,
    pub health: i32,
}

impl DimensionScores {
    /// Values in field order.
    pub const fn as_array(&self) -> [i32; 6] {
        [
            self.total,
            self.wealth,
            self.career,
            self.marriage,
            self.family,
            self.health,
        ]
    }
}

/// One year of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPoint {
    /// Age counting the birth year as 1.
    pub age: u32,
    pub year: i32,
    pub luck: LuckLabel,
    pub annual: Pillar,
    pub scores: DimensionScores,
    pub narrative: String,
}

/// Quality band of a luck pillar's mean total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckTier {
    Good,
    Normal,
    Poor,
}

impl LuckTier {
    /// Good at 70 and above, Normal at 55 and above.
    pub const fn for_score(score: i32) -> Self {
        if score >= 70 {
            Self::Good
        } else if score >= 55 {
            Self::Normal
        } else {
            Self::Poor
        }
    }
}

/// Mean total score over the timeline years one luck pillar covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckSummary {
    pub luck: LuckPillar,
    pub average_total: i32,
    pub tier: LuckTier,
}

/// Score assumed for a luck pillar with no timeline years.
pub const EMPTY_LUCK_SCORE: i32 = 60;

/// Options for timeline synthesis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Narrative language.
    #[serde(default)]
    pub locale: Locale,
}

/// The 80-year timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub points: Vec<YearPoint>,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point for an age, if inside the timeline.
    pub fn at_age(&self, age: u32) -> Option<&YearPoint> {
        self.points.iter().find(|p| p.age == age)
    }

    /// Point for a calendar year, if inside the timeline.
    pub fn at_year(&self, year: i32) -> Option<&YearPoint> {
        self.points.iter().find(|p| p.year == year)
    }

    /// Per-dimension means, rounded half up. `None` for an empty timeline.
    pub fn average_scores(&self) -> Option<DimensionScores> {
        if self.points.is_empty() {
            return None;
        }
        let mut sums = [0i64; 6];
        for p in &self.points {
            for (sum, v) in sums.iter_mut().zip(p.scores.as_array()) {
                *sum += i64::from(v);
            }
        }
        let n = self.points.len() as f64;
        let mean = |sum: i64| (sum as f64 / n).round() as i32;
        Some(DimensionScores {
            total: mean(sums[0]),
            wealth: mean(sums[1]),
            career: mean(sums[2]),
            marriage: mean(sums[3]),
            family: mean(sums[4]),
            health: mean(sums[5]),
        })
    }

    /// Mean total and tier for each luck pillar of `cycle`.
    pub fn luck_summaries(&self, cycle: &LuckCycle) -> Vec<LuckSummary> {
        cycle
            .pillars
            .iter()
            .map(|lp| {
                let totals: Vec<i32> = self
                    .points
                    .iter()
                    .filter(|p| lp.covers_age(p.age))
                    .map(|p| p.scores.total)
                    .collect();
                let average_total = if totals.is_empty() {
                    EMPTY_LUCK_SCORE
                } else {
                    let sum: i64 = totals.iter().map(|&t| i64::from(t)).sum();
                    (sum as f64 / totals.len() as f64).round() as i32
                };
                LuckSummary {
                    luck: *lp,
                    average_total,
                    tier: LuckTier::for_score(average_total),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luck_label_text_and_parse() {
        assert_eq!(LuckLabel::PreOnset.to_string(), "童限");
        assert_eq!(LuckLabel::PreOnset.text(Locale::En), "Childhood");
        let l: LuckLabel = "辛巳".parse().unwrap();
        assert_eq!(l.pillar().map(|p| p.to_string()), Some("辛巳".to_string()));
        assert_eq!("童限".parse::<LuckLabel>().unwrap(), LuckLabel::PreOnset);
        assert!("童年".parse::<LuckLabel>().is_err());
    }

    #[test]
    fn luck_label_serializes_as_text() {
        let json = serde_json::to_string(&LuckLabel::PreOnset).unwrap();
        assert_eq!(json, "\"童限\"");
    }

    #[test]
    fn luck_tier_edges() {
        assert_eq!(LuckTier::for_score(70), LuckTier::Good);
        assert_eq!(LuckTier::for_score(69), LuckTier::Normal);
        assert_eq!(LuckTier::for_score(55), LuckTier::Normal);
        assert_eq!(LuckTier::for_score(54), LuckTier::Poor);
    }

    #[test]
    fn empty_timeline_has_no_average() {
        let t = Timeline { points: Vec::new() };
        assert!(t.is_empty());
        assert_eq!(t.average_scores(), None);
    }

    #[test]
    fn averages_round_half_up() {
        let point = |total| YearPoint {
            age: 1,
            year: 2000,
            luck: LuckLabel::PreOnset,
            annual: Pillar::from_cycle_index(16),
            scores: DimensionScores {
                total,
                ..DimensionScores::default()
            },
            narrative: String::new(),
        };
        let t = Timeline {
            points: vec![point(60), point(61)],
        };
        assert_eq!(t.average_scores().map(|s| s.total), Some(61));
    }
}
