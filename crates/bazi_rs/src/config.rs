//! Report configuration, loaded from TOML.
//!
//! ```toml
//! locale = "en"          # "zh" (default) or "en"
//! reference_year = 2026  # marks the luck pillar in force that year
//! ```

use std::fs;
use std::path::Path;

use bazi_base::{Locale, TimelineConfig};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Options for report assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Language of narratives, labels and readings.
    pub locale: Locale,
    /// Calendar year used to flag the current luck pillar.
    pub reference_year: Option<i32>,
}

impl ReportConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ReportError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Timeline options implied by this configuration.
    pub fn timeline(&self) -> TimelineConfig {
        TimelineConfig {
            locale: self.locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_default() {
        let c = ReportConfig::from_toml_str("").unwrap();
        assert_eq!(c, ReportConfig::default());
        assert_eq!(c.locale, Locale::Zh);
        assert_eq!(c.reference_year, None);
    }

    #[test]
    fn parses_fields() {
        let c = ReportConfig::from_toml_str("locale = \"en\"\nreference_year = 2026\n").unwrap();
        assert_eq!(c.locale, Locale::En);
        assert_eq!(c.reference_year, Some(2026));
        assert_eq!(c.timeline().locale, Locale::En);
    }

    #[test]
    fn rejects_unknown_locale_and_keys() {
        assert!(matches!(
            ReportConfig::from_toml_str("locale = \"fr\""),
            Err(ReportError::Config(_))
        ));
        assert!(matches!(
            ReportConfig::from_toml_str("colour = 1"),
            Err(ReportError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            ReportConfig::load("/nonexistent/bazi.toml"),
            Err(ReportError::Io(_))
        ));
    }
}
