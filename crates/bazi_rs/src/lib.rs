//! Convenience layer over the BaZi chart engine.
//!
//! Accepts raw birth input, assembles the complete report (chart,
//! strength, pattern, luck cycle, 80-year timeline, readings and
//! suggestions) and provides the seam through which an external report
//! provider can be tried first with the local engine as fallback.
//!
//! # Quick start
//!
//! ```rust
//! use bazi_rs::*;
//!
//! let input = BirthInput::new(1996, 3, 15, 10, Gender::Male);
//! let report = fallback_report(&input, &ReportConfig::default()).unwrap();
//! assert_eq!(report.bazi, ["丙子", "庚辰", "辛亥", "庚戌"]);
//! assert_eq!(report.chart_points.len(), 80);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod provider;
pub mod report;

pub use config::ReportConfig;
pub use error::ReportError;
pub use input::BirthInput;
pub use provider::{
    LocalProvider, ProvidedReport, ReportProvider, ReportSource, report_with_fallback,
};
pub use report::{
    ChartPoint, DaYunEntry, DaYunReport, FallbackReport, ReportSuggestions, fallback_report,
};

// Re-export engine types so callers need only this crate.
pub use bazi_base::{
    Chart, DimensionScores, Gender, Locale, LuckCycle, LuckTier, Pattern, Pillar, Strength,
    Timeline,
};
