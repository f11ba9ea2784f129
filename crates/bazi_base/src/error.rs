//! Error types for chart computation.

use bazi_time::TimeError;
use thiserror::Error;

/// Errors from the chart engine. All are input-contract violations;
/// identical inputs always reproduce the same error.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Invalid caller-supplied parameter.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Date text or calendar parts rejected by the calendar layer.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Text is not a two-symbol stem-branch pair from the 60-cycle.
    #[error("not a sexagenary pillar: {0:?}")]
    InvalidPillar(String),
}
