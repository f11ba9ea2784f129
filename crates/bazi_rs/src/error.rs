//! Error type for report assembly.

use bazi_base::BaziError;
use bazi_time::TimeError;
use thiserror::Error;

/// Errors from report generation and configuration loading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// Chart engine rejected the input.
    #[error(transparent)]
    Bazi(#[from] BaziError),
    /// Configuration text could not be parsed.
    #[error("config error: {0}")]
    Config(String),
    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A report provider failed.
    #[error("provider error: {0}")]
    Provider(String),
}

impl From<TimeError> for ReportError {
    fn from(e: TimeError) -> Self {
        Self::Bazi(BaziError::from(e))
    }
}

impl From<toml::de::Error> for ReportError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
