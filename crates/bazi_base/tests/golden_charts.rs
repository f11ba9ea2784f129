//! Golden-value tests for full chart analysis and timeline synthesis.
//!
//! Reference values come from hand-checked charts: the 1996-03-15
//! block-10 male chart, a weak-master female chart, a yin-year male
//! chart with a reverse luck cycle, and a chart whose month relation
//! has no pattern of its own.

use bazi_base::{
    Gender, LuckDirection, LuckLabel, Pattern, Strength, TenGod, Timeline, classify_pattern,
    classify_strength, compute_chart, compute_luck_cycle, pattern_analysis, synthesize_timeline,
};

fn timeline_for(y: i32, m: u32, d: u32, h: u8, gender: Gender) -> Timeline {
    let chart = compute_chart(y, m, d, h).unwrap();
    let cycle = compute_luck_cycle(&chart, gender, y);
    synthesize_timeline(&chart, y, &cycle, classify_strength(&chart))
}

#[test]
fn reference_chart_end_to_end() {
    let chart = compute_chart(1996, 3, 15, 10).unwrap();
    assert_eq!(chart.to_string(), "丙子 庚辰 辛亥 庚戌");
    assert_eq!(classify_strength(&chart), Strength::Strong);
    assert_eq!(classify_pattern(&chart), Pattern::DirectSeal);
    assert_eq!(classify_pattern(&chart).name(), "Direct-Seal Pattern");

    let cycle = compute_luck_cycle(&chart, Gender::Male, 1996);
    assert_eq!(cycle.direction, LuckDirection::Forward);
    assert_eq!(cycle.pillars[0].pillar.to_string(), "辛巳");
    assert_eq!(cycle.pillars[1].pillar.to_string(), "壬午");

    let t = synthesize_timeline(&chart, 1996, &cycle, Strength::Strong);
    let first: Vec<(i32, String, String, i32)> = t.points[..3]
        .iter()
        .map(|p| (p.year, p.annual.to_string(), p.luck.to_string(), p.scores.total))
        .collect();
    assert_eq!(
        first,
        [
            (1996, "丙子".to_string(), "童限".to_string(), 54),
            (1997, "丁丑".to_string(), "童限".to_string(), 57),
            (1998, "戊寅".to_string(), "辛巳".to_string(), 70),
        ]
    );
}

#[test]
fn reference_chart_late_years() {
    let t = timeline_for(1996, 3, 15, 10, Gender::Male);
    let p = t.at_age(61).unwrap();
    assert_eq!(p.year, 2056);
    assert_eq!(p.scores.as_array(), [56, 50, 45, 49, 53, 50]);
    assert_eq!(
        p.narrative,
        "丙子年，丙戌运。小有波折。工作压力大，感情需经营。稳中求进。"
    );
    let last = t.at_age(80).unwrap();
    assert_eq!(last.year, 2075);
    assert_eq!(last.luck.to_string(), "戊子");
    assert_eq!(last.scores.total, 73);
}

#[test]
fn weak_female_chart() {
    let chart = compute_chart(1990, 1, 8, 4).unwrap();
    assert_eq!(chart.to_string(), "己巳 庚寅 癸酉 丙辰");
    assert_eq!(classify_strength(&chart), Strength::Weak);
    assert_eq!(classify_pattern(&chart), Pattern::HurtingOfficer);

    let cycle = compute_luck_cycle(&chart, Gender::Female, 1990);
    assert_eq!(cycle.direction, LuckDirection::Forward);
    assert_eq!(cycle.pillars[0].pillar.to_string(), "辛卯");
    assert_eq!(
        (cycle.pillars[0].start_year, cycle.pillars[0].end_year),
        (1993, 2002)
    );

    let t = synthesize_timeline(&chart, 1990, &cycle, Strength::Weak);
    assert_eq!(t.points[0].annual.to_string(), "庚午");
    assert_eq!(t.points[0].scores.as_array(), [55, 47, 49, 53, 52, 54]);
    assert_eq!(
        t.points[0].narrative,
        "庚午年，童限运。小有波折。财务宜守，工作压力大。稳中求进。"
    );
    assert_eq!(t.points[1].scores.as_array(), [67, 64, 65, 65, 71, 70]);
    assert_eq!(t.points[2].scores.as_array(), [60, 52, 54, 58, 57, 59]);
    assert_eq!(t.points[3].scores.as_array(), [71, 74, 68, 74, 74, 73]);

    let p60 = t.at_age(60).unwrap();
    assert_eq!(p60.annual.to_string(), "己巳");
    assert_eq!(p60.luck.to_string(), "丙申");
    assert_eq!((p60.scores.total, p60.scores.health), (56, 51));
    assert_eq!(t.at_age(61).unwrap().scores.total, 52);
}

#[test]
fn yin_year_male_reverse_cycle() {
    let chart = compute_chart(1985, 12, 25, 7).unwrap();
    assert_eq!(chart.to_string(), "乙丑 丁丑 戊戌 乙未");
    assert_eq!(classify_strength(&chart), Strength::Strong);

    let t = timeline_for(1985, 12, 25, 7, Gender::Male);
    assert_eq!(t.points[0].scores.total, 58);
    assert_eq!(t.points[0].narrative, "乙丑年，童限运。小有波折。财务宜守。稳中求进。");
    assert_eq!(t.points[1].scores.total, 61);
    assert_eq!(t.points[2].scores.total, 69);
    assert_eq!(t.points[2].luck.to_string(), "丙子");
    assert_eq!(t.points[3].luck.to_string(), "丙子");
}

#[test]
fn pattern_fallback_chart() {
    let chart = compute_chart(1984, 2, 4, 0).unwrap();
    assert_eq!(classify_strength(&chart), Strength::Balanced);
    let a = pattern_analysis(&chart);
    assert_eq!(a.relation, TenGod::IndirectOfficer);
    assert_eq!(a.pattern, Pattern::DirectOfficer);
    assert!(a.fallback);
}

#[test]
fn pre_onset_only_first_two_years() {
    let t = timeline_for(2024, 6, 5, 3, Gender::Female);
    let pre: Vec<u32> = t
        .points
        .iter()
        .filter(|p| p.luck == LuckLabel::PreOnset)
        .map(|p| p.age)
        .collect();
    assert_eq!(pre, [1, 2]);
}
