//! Locally computed report, shaped for the presentation layer.
//!
//! Field names serialize in camelCase (`chartPoints`, `daYun`, `ganZhi`,
//! ...) so the same consumer can render either a provider's report or
//! this one.

use bazi_base::{
    Chart, ChartReading, DimensionScores, Gender, Locale, LuckCycle, LuckTier, Pattern, Strength,
    Timeline, chart_for, classify_strength, compute_luck_cycle, pattern_analysis,
    synthesize_timeline_with,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::input::BirthInput;

/// One luck pillar as listed in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaYunEntry {
    pub ganzhi: String,
    pub start_age: u32,
    pub end_age: u32,
    pub start_year: i32,
    pub end_year: i32,
    /// Rounded mean total score of the timeline years inside this pillar.
    pub average_score: i32,
    pub tier: LuckTier,
    /// In force during the configured reference year.
    pub current: bool,
}

/// The luck cycle as listed in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaYunReport {
    pub direction: String,
    pub start_age: u32,
    pub list: Vec<DaYunEntry>,
}

/// One timeline year as listed in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub age: u32,
    pub year: i32,
    pub da_yun: String,
    pub gan_zhi: String,
    pub scores: DimensionScores,
    pub reason: String,
    /// Same as `scores.total`.
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSuggestions {
    pub favorable_directions: Vec<String>,
    pub favorable_colors: Vec<String>,
    pub favorable_numbers: Vec<String>,
    pub noble_people: Vec<String>,
}

/// The complete report body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackReport {
    pub name: Option<String>,
    pub gender: Gender,
    pub year: i32,
    /// Year, month, day and hour pillars.
    pub bazi: [String; 4],
    pub day_master: String,
    pub strength: String,
    pub pattern_type: String,
    pub pattern_description: String,
    pub dayun: DaYunReport,
    pub chart_points: Vec<ChartPoint>,
    pub avg_scores: DimensionScores,
    pub base_level_score: i32,
    pub summary_score: i32,
    pub industry_analysis: String,
    pub wealth_analysis: String,
    pub marriage_analysis: String,
    pub health_analysis: String,
    pub suggestions: ReportSuggestions,
}

/// Compute the full report locally.
pub fn fallback_report(
    input: &BirthInput,
    config: &ReportConfig,
) -> Result<FallbackReport, ReportError> {
    let moment = input.moment()?;
    let chart = chart_for(&moment);
    let strength = classify_strength(&chart);
    let analysis = pattern_analysis(&chart);
    let cycle = compute_luck_cycle(&chart, input.gender, input.year);
    let timeline =
        synthesize_timeline_with(&chart, input.year, &cycle, strength, &config.timeline());
    let reading =
        ChartReading::for_chart_in(&chart, strength, analysis.pattern, input.gender, config.locale);

    debug!(
        chart = %chart,
        strength = strength.name(),
        pattern = analysis.pattern.name(),
        fallback_pattern = analysis.fallback,
        "local report assembled"
    );

    Ok(assemble(
        input, config, &chart, strength, analysis.pattern, &cycle, &timeline, reading,
    ))
}

#[allow(clippy::too_many_arguments)]
fn assemble(
    input: &BirthInput,
    config: &ReportConfig,
    chart: &Chart,
    strength: Strength,
    pattern: Pattern,
    cycle: &LuckCycle,
    timeline: &Timeline,
    reading: ChartReading,
) -> FallbackReport {
    let locale = config.locale;
    let avg_scores = timeline.average_scores().unwrap_or_default();
    let current_order = config
        .reference_year
        .and_then(|y| cycle.current(input.year, y))
        .map(|lp| lp.order);

    let list = timeline
        .luck_summaries(cycle)
        .into_iter()
        .map(|s| DaYunEntry {
            ganzhi: s.luck.pillar.to_string(),
            start_age: s.luck.start_age,
            end_age: s.luck.end_age,
            start_year: s.luck.start_year,
            end_year: s.luck.end_year,
            average_score: s.average_total,
            tier: s.tier,
            current: current_order == Some(s.luck.order),
        })
        .collect();

    let chart_points = timeline
        .points
        .iter()
        .map(|p| ChartPoint {
            age: p.age,
            year: p.year,
            da_yun: p.luck.text(locale),
            gan_zhi: p.annual.to_string(),
            scores: p.scores,
            reason: p.narrative.clone(),
            score: p.scores.total,
        })
        .collect();

    let day_master = chart.day_master();
    FallbackReport {
        name: input.name.clone(),
        gender: input.gender,
        year: input.year,
        bazi: chart.pillars().map(|p| p.to_string()),
        day_master: match locale {
            Locale::Zh => day_master.symbol().to_string(),
            Locale::En => format!("{} ({})", day_master.symbol(), day_master.english_name()),
        },
        strength: match locale {
            Locale::Zh => strength.chinese_name().to_string(),
            Locale::En => strength.name().to_string(),
        },
        pattern_type: pattern.localized_name(locale).to_string(),
        pattern_description: pattern.description(locale).to_string(),
        dayun: DaYunReport {
            direction: match locale {
                Locale::Zh => cycle.direction.chinese_name().to_string(),
                Locale::En => cycle.direction.name().to_string(),
            },
            start_age: cycle.onset_age,
            list,
        },
        chart_points,
        avg_scores,
        base_level_score: avg_scores.total,
        summary_score: avg_scores.total,
        industry_analysis: reading.career,
        wealth_analysis: reading.wealth,
        marriage_analysis: reading.marriage,
        health_analysis: reading.health,
        suggestions: ReportSuggestions {
            favorable_directions: reading.suggestions.directions,
            favorable_colors: reading.suggestions.colors,
            favorable_numbers: reading.suggestions.numbers,
            noble_people: reading.suggestions.noble_people,
        },
    }
}
