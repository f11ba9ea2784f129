//! Four Pillars (BaZi) chart engine.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, hidden stems and the 60-cycle
//! - Year, month, day and hour pillar computation from a solar date
//! - Elemental tally and day-master strength
//! - Ten-God relations and structural pattern classification
//! - Ten-year luck-cycle scheduling
//! - A deterministic 80-year fortune timeline with yearly narratives
//! - Templated chart readings and favourable-element suggestions
//!
//! Everything is approximation-grade: fixed February 4 and day-6 cutoffs
//! stand in for the solar terms, and no true-solar-time correction is
//! applied. All functions are pure and deterministic.

pub mod balance;
pub mod branch;
pub mod chart;
pub mod element;
pub mod error;
pub mod locale;
pub mod luck;
pub mod pattern;
pub mod reading;
pub mod sexagenary;
pub mod stem;
pub mod ten_god;
pub mod timeline;

pub use balance::{
    ElementCounts, Strength, StrengthBalance, classify_balance, classify_strength,
    count_elements, strength_balance,
};
pub use branch::{ALL_BRANCHES, Branch};
pub use chart::{
    ALL_POSITIONS, CYCLE_ANCHOR_YEAR, Chart, PillarPosition, annual_pillar, chart_for,
    compute_chart, day_pillar, hour_pillar, month_pillar, year_pillar,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::BaziError;
pub use locale::Locale;
pub use luck::{
    Gender, LuckCycle, LuckDirection, LuckPillar, ONSET_AGE, compute_luck_cycle, luck_direction,
};
pub use pattern::{
    ALL_PATTERNS, DEFAULT_PATTERN, Pattern, PatternAnalysis, classify_pattern, pattern_analysis,
};
pub use reading::{ChartReading, Suggestions, suggestions_for};
pub use sexagenary::{Pillar, SEXAGENARY_CYCLE};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};
pub use timeline::{
    DimensionScores, LuckLabel, LuckSummary, LuckTier, TIMELINE_YEARS, Timeline, TimelineConfig,
    YearPoint, synthesize_timeline, synthesize_timeline_with,
};
