//! Deterministic 80-year fortune timeline.
//!
//! For each age 1..=80 the synthesizer finds the active luck pillar and
//! the year's annual pillar, scores six life dimensions from fixed
//! bonuses plus a pseudo-random seed derived from the age and the annual
//! stem, and writes a templated one-line narrative.

pub mod narrative;
pub mod score;
pub mod synthesize;
pub mod types;

pub use narrative::{Advice, FortuneTier, YearEvent, advice_for, events_for, narrative, tier_for};
pub use score::{ScoreInputs, age_bonus, luck_bonus, score_year, year_bonus, year_seed};
pub use synthesize::{synthesize_timeline, synthesize_timeline_with};
pub use types::{
    DimensionScores, LuckLabel, LuckSummary, LuckTier, TIMELINE_YEARS, Timeline, TimelineConfig,
    YearPoint,
};
