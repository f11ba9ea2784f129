//! Report providers and the local fallback.
//!
//! A provider turns birth input into a report. An external generative
//! service would be one provider; the chart engine itself is the
//! `LocalProvider`. `report_with_fallback` tries a primary provider and
//! substitutes the local report when it fails.

use tracing::{info, warn};

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::input::BirthInput;
use crate::report::{FallbackReport, fallback_report};

/// Something that can produce a report for a birth.
pub trait ReportProvider {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    fn generate(
        &self,
        input: &BirthInput,
        config: &ReportConfig,
    ) -> Result<FallbackReport, ReportError>;
}

/// The deterministic local engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProvider;

impl ReportProvider for LocalProvider {
    fn name(&self) -> &str {
        "local"
    }

    fn generate(
        &self,
        input: &BirthInput,
        config: &ReportConfig,
    ) -> Result<FallbackReport, ReportError> {
        fallback_report(input, config)
    }
}

/// Which provider produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    Primary,
    Fallback,
}

/// A report together with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvidedReport {
    pub report: FallbackReport,
    pub source: ReportSource,
}

/// Ask `primary` for a report; on any failure log a warning and return
/// the local report instead. Errors only if the local engine also
/// rejects the input.
pub fn report_with_fallback(
    primary: &dyn ReportProvider,
    input: &BirthInput,
    config: &ReportConfig,
) -> Result<ProvidedReport, ReportError> {
    match primary.generate(input, config) {
        Ok(report) => {
            info!(provider = primary.name(), "report generated");
            Ok(ProvidedReport {
                report,
                source: ReportSource::Primary,
            })
        }
        Err(e) => {
            warn!(
                provider = primary.name(),
                error = %e,
                "provider failed, using local report"
            );
            let report = LocalProvider.generate(input, config)?;
            Ok(ProvidedReport {
                report,
                source: ReportSource::Fallback,
            })
        }
    }
}
