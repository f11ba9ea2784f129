//! Timeline synthesis over ages 1..=80.

use tracing::trace;

use crate::balance::Strength;
use crate::chart::{Chart, annual_pillar};
use crate::luck::LuckCycle;

use super::narrative::narrative;
use super::score::{ScoreInputs, score_year};
use super::types::{LuckLabel, TIMELINE_YEARS, Timeline, TimelineConfig, YearPoint};

/// Synthesize the timeline with Chinese narratives.
pub fn synthesize_timeline(
    chart: &Chart,
    birth_year: i32,
    cycle: &LuckCycle,
    strength: Strength,
) -> Timeline {
    synthesize_timeline_with(chart, birth_year, cycle, strength, &TimelineConfig::default())
}

/// Synthesize the timeline with explicit options.
///
/// Age 1 is the birth year. The annual pillar is the plain calendar-year
/// pillar, so a birth before February 4 still gets the birth year's
/// pillar at age 1 even though the chart's year pillar is the prior one.
pub fn synthesize_timeline_with(
    chart: &Chart,
    birth_year: i32,
    cycle: &LuckCycle,
    strength: Strength,
    config: &TimelineConfig,
) -> Timeline {
    let day_element = chart.day_master().element();
    let mut points = Vec::with_capacity(TIMELINE_YEARS as usize);

    for age in 1..=TIMELINE_YEARS {
        let year = birth_year.saturating_add(age as i32 - 1);
        let annual = annual_pillar(year);
        let luck = LuckLabel::from(cycle.active_at(age));
        let scores = score_year(&ScoreInputs {
            day_element,
            strength,
            luck,
            annual,
            age,
        });
        let text = narrative(annual, luck, &scores, age, config.locale);
        points.push(YearPoint {
            age,
            year,
            luck,
            annual,
            scores,
            narrative: text,
        });
    }

    trace!(
        chart = %chart,
        birth_year,
        strength = strength.name(),
        points = points.len(),
        "timeline synthesized"
    );
    Timeline { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::classify_strength;
    use crate::chart::compute_chart;
    use crate::locale::Locale;
    use crate::luck::{Gender, compute_luck_cycle};

    fn reference() -> (Chart, LuckCycle, Strength) {
        let chart = compute_chart(1996, 3, 15, 10).unwrap();
        let cycle = compute_luck_cycle(&chart, Gender::Male, 1996);
        let strength = classify_strength(&chart);
        (chart, cycle, strength)
    }

    #[test]
    fn eighty_consecutive_points() {
        let (chart, cycle, strength) = reference();
        let t = synthesize_timeline(&chart, 1996, &cycle, strength);
        assert_eq!(t.len(), 80);
        for (i, p) in t.points.iter().enumerate() {
            assert_eq!(p.age as usize, i + 1);
            assert_eq!(p.year, 1996 + i as i32);
        }
    }

    #[test]
    fn pre_onset_then_first_pillar() {
        let (chart, cycle, strength) = reference();
        let t = synthesize_timeline(&chart, 1996, &cycle, strength);
        assert_eq!(t.points[0].luck, LuckLabel::PreOnset);
        assert_eq!(t.points[1].luck, LuckLabel::PreOnset);
        assert_eq!(t.points[2].luck.to_string(), "辛巳");
        assert_eq!(t.points[79].luck.to_string(), "戊子");
    }

    #[test]
    fn reference_narratives() {
        let (chart, cycle, strength) = reference();
        let t = synthesize_timeline(&chart, 1996, &cycle, strength);
        assert_eq!(
            t.points[0].narrative,
            "丙子年，童限运。小有波折。财务宜守，工作压力大。宜守成待机。"
        );
        assert_eq!(
            t.points[1].narrative,
            "丁丑年，童限运。小有波折。工作压力大，注意健康。稳中求进。"
        );
        assert_eq!(t.points[2].narrative, "戊寅年，辛巳运。顺遂之年。可适度进取。");
    }

    #[test]
    fn averages_and_luck_summaries() {
        let (chart, cycle, strength) = reference();
        let t = synthesize_timeline(&chart, 1996, &cycle, strength);
        let avg = t.average_scores().unwrap();
        assert_eq!(avg.as_array(), [67, 64, 64, 66, 67, 65]);
        let means: Vec<i32> = t
            .luck_summaries(&cycle)
            .iter()
            .map(|s| s.average_total)
            .collect();
        assert_eq!(means, [61, 67, 73, 72, 70, 66, 66, 65]);
    }

    #[test]
    fn english_locale_changes_only_text() {
        let (chart, cycle, strength) = reference();
        let zh = synthesize_timeline(&chart, 1996, &cycle, strength);
        let en = synthesize_timeline_with(
            &chart,
            1996,
            &cycle,
            strength,
            &TimelineConfig { locale: Locale::En },
        );
        for (a, b) in zh.points.iter().zip(&en.points) {
            assert_eq!(a.scores, b.scores);
            assert_eq!(a.luck, b.luck);
            assert_ne!(a.narrative, b.narrative);
        }
    }
}
