//! One-line yearly narratives.
//!
//! Template: `{annual}年，{luck}运。{tier}。{events}。{advice}。`
//! At most two events are kept; with none the event clause is left out.

use crate::locale::Locale;
use crate::sexagenary::Pillar;

use super::types::{DimensionScores, LuckLabel};

/// Maximum number of events mentioned per year.
pub const MAX_EVENTS: usize = 2;

/// Overall fortune band from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FortuneTier {
    Great,
    Smooth,
    Steady,
    Setback,
    Caution,
}

impl FortuneTier {
    pub const fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Great, Locale::Zh) => "大吉之年",
            (Self::Smooth, Locale::Zh) => "顺遂之年",
            (Self::Steady, Locale::Zh) => "平稳之年",
            (Self::Setback, Locale::Zh) => "小有波折",
            (Self::Caution, Locale::Zh) => "需谨慎行事",
            (Self::Great, Locale::En) => "A highly auspicious year",
            (Self::Smooth, Locale::En) => "A smooth year",
            (Self::Steady, Locale::En) => "A steady year",
            (Self::Setback, Locale::En) => "Some minor setbacks",
            (Self::Caution, Locale::En) => "Act with caution",
        }
    }
}

/// Dimension-specific remark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearEvent {
    WealthFlourishing,
    GuardFinances,
    CareerSuccess,
    WorkPressure,
    Romance,
    FamilyHarmony,
    RelationshipCare,
    HealthCare,
}

impl YearEvent {
    pub const fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::WealthFlourishing, Locale::Zh) => "财运亨通",
            (Self::GuardFinances, Locale::Zh) => "财务宜守",
            (Self::CareerSuccess, Locale::Zh) => "事业有成",
            (Self::WorkPressure, Locale::Zh) => "工作压力大",
            (Self::Romance, Locale::Zh) => "桃花旺盛",
            (Self::FamilyHarmony, Locale::Zh) => "家庭和睦",
            (Self::RelationshipCare, Locale::Zh) => "感情需经营",
            (Self::HealthCare, Locale::Zh) => "注意健康",
            (Self::WealthFlourishing, Locale::En) => "wealth flows freely",
            (Self::GuardFinances, Locale::En) => "guard your finances",
            (Self::CareerSuccess, Locale::En) => "career success",
            (Self::WorkPressure, Locale::En) => "heavy work pressure",
            (Self::Romance, Locale::En) => "romance blossoms",
            (Self::FamilyHarmony, Locale::En) => "harmony at home",
            (Self::RelationshipCare, Locale::En) => "relationships need care",
            (Self::HealthCare, Locale::En) => "mind your health",
        }
    }
}

/// Closing advice from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advice {
    Advance,
    HoldSteady,
    SteadyProgress,
}

impl Advice {
    pub const fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Advance, Locale::Zh) => "可适度进取",
            (Self::HoldSteady, Locale::Zh) => "宜守成待机",
            (Self::SteadyProgress, Locale::Zh) => "稳中求进",
            (Self::Advance, Locale::En) => "Push forward in measure",
            (Self::HoldSteady, Locale::En) => "Hold your ground and wait",
            (Self::SteadyProgress, Locale::En) => "Make steady progress",
        }
    }
}

pub const fn tier_for(total: i32) -> FortuneTier {
    if total >= 80 {
        FortuneTier::Great
    } else if total >= 70 {
        FortuneTier::Smooth
    } else if total >= 60 {
        FortuneTier::Steady
    } else if total >= 50 {
        FortuneTier::Setback
    } else {
        FortuneTier::Caution
    }
}

pub const fn advice_for(total: i32) -> Advice {
    if total >= 70 {
        Advice::Advance
    } else if total < 55 {
        Advice::HoldSteady
    } else {
        Advice::SteadyProgress
    }
}

/// All events the scores trigger, in wealth, career, marriage, health order.
pub fn events_for(scores: &DimensionScores, age: u32) -> Vec<YearEvent> {
    let mut events = Vec::with_capacity(4);
    if scores.wealth >= 75 {
        events.push(YearEvent::WealthFlourishing);
    } else if scores.wealth < 50 {
        events.push(YearEvent::GuardFinances);
    }
    if scores.career >= 75 {
        events.push(YearEvent::CareerSuccess);
    } else if scores.career < 50 {
        events.push(YearEvent::WorkPressure);
    }
    if scores.marriage >= 75 {
        events.push(if age <= 35 {
            YearEvent::Romance
        } else {
            YearEvent::FamilyHarmony
        });
    } else if scores.marriage < 50 {
        events.push(YearEvent::RelationshipCare);
    }
    if scores.health < 55 {
        events.push(YearEvent::HealthCare);
    }
    events
}

/// Render the narrative line for one year.
pub fn narrative(
    annual: Pillar,
    luck: LuckLabel,
    scores: &DimensionScores,
    age: u32,
    locale: Locale,
) -> String {
    let tier = tier_for(scores.total).text(locale);
    let advice = advice_for(scores.total).text(locale);
    let events: Vec<&str> = events_for(scores, age)
        .into_iter()
        .take(MAX_EVENTS)
        .map(|e| e.text(locale))
        .collect();
    let luck = luck.text(locale);

    match locale {
        Locale::Zh => {
            let mut out = format!("{annual}年，{luck}运。{tier}。");
            if !events.is_empty() {
                out.push_str(&events.join("，"));
                out.push('。');
            }
            out.push_str(advice);
            out.push('。');
            out
        }
        Locale::En => {
            let mut out = format!("{annual} year, {luck} luck. {tier}. ");
            if !events.is_empty() {
                let joined = events.join(", ");
                let mut chars = joined.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                }
                out.push_str(". ");
            }
            out.push_str(advice);
            out.push('.');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(arr: [i32; 6]) -> DimensionScores {
        DimensionScores {
            total: arr[0],
            wealth: arr[1],
            career: arr[2],
            marriage: arr[3],
            family: arr[4],
            health: arr[5],
        }
    }

    fn pillar(text: &str) -> Pillar {
        text.parse().unwrap()
    }

    #[test]
    fn tier_edges() {
        assert_eq!(tier_for(80), FortuneTier::Great);
        assert_eq!(tier_for(79), FortuneTier::Smooth);
        assert_eq!(tier_for(60), FortuneTier::Steady);
        assert_eq!(tier_for(50), FortuneTier::Setback);
        assert_eq!(tier_for(49), FortuneTier::Caution);
    }

    #[test]
    fn advice_edges() {
        assert_eq!(advice_for(70), Advice::Advance);
        assert_eq!(advice_for(69), Advice::SteadyProgress);
        assert_eq!(advice_for(55), Advice::SteadyProgress);
        assert_eq!(advice_for(54), Advice::HoldSteady);
    }

    #[test]
    fn two_events_kept() {
        let s = scores([54, 48, 43, 47, 51, 52]);
        assert_eq!(
            narrative(pillar("丙子"), LuckLabel::PreOnset, &s, 1, Locale::Zh),
            "丙子年，童限运。小有波折。财务宜守，工作压力大。宜守成待机。"
        );
    }

    #[test]
    fn third_event_dropped() {
        let s = scores([56, 50, 45, 49, 53, 50]);
        assert_eq!(events_for(&s, 61).len(), 3);
        assert_eq!(
            narrative(pillar("丙子"), LuckLabel::Pillar(pillar("丙戌")), &s, 61, Locale::Zh),
            "丙子年，丙戌运。小有波折。工作压力大，感情需经营。稳中求进。"
        );
    }

    #[test]
    fn no_events_omits_clause() {
        let s = scores([70, 69, 70, 70, 71, 71]);
        assert_eq!(
            narrative(pillar("戊寅"), LuckLabel::Pillar(pillar("辛巳")), &s, 3, Locale::Zh),
            "戊寅年，辛巳运。顺遂之年。可适度进取。"
        );
    }

    #[test]
    fn marriage_event_depends_on_age() {
        let s = scores([74, 76, 70, 76, 76, 72]);
        assert_eq!(
            events_for(&s, 35),
            vec![YearEvent::WealthFlourishing, YearEvent::Romance]
        );
        assert_eq!(
            events_for(&s, 59),
            vec![YearEvent::WealthFlourishing, YearEvent::FamilyHarmony]
        );
    }

    #[test]
    fn low_health_adds_health_event() {
        let s = scores([60, 60, 60, 60, 60, 54]);
        assert_eq!(events_for(&s, 40), vec![YearEvent::HealthCare]);
        assert_eq!(YearEvent::HealthCare.text(Locale::Zh), "注意健康");
        assert!(events_for(&scores([60, 60, 60, 60, 60, 55]), 40).is_empty());
    }

    #[test]
    fn english_rendering() {
        let s = scores([54, 48, 43, 47, 51, 52]);
        assert_eq!(
            narrative(pillar("丙子"), LuckLabel::PreOnset, &s, 1, Locale::En),
            "丙子 year, Childhood luck. Some minor setbacks. Guard your finances, heavy work pressure. Hold your ground and wait."
        );
        let s = scores([70, 69, 70, 70, 71, 71]);
        assert_eq!(
            narrative(pillar("戊寅"), LuckLabel::Pillar(pillar("辛巳")), &s, 3, Locale::En),
            "戊寅 year, 辛巳 luck. A smooth year. Push forward in measure."
        );
    }
}
