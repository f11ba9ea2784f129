//! Luck-cycle generation from a chart.

use crate::chart::Chart;
use crate::sexagenary::Pillar;
use crate::stem::Stem;

use super::types::{
    Gender, LUCK_PILLAR_COUNT, LUCK_PILLAR_YEARS, LuckCycle, LuckDirection, LuckPillar, ONSET_AGE,
};

/// Forward for a yang year with a male native or a yin year with a
/// female native; reverse otherwise.
pub const fn luck_direction(year_stem: Stem, gender: Gender) -> LuckDirection {
    if year_stem.is_yang() == gender.is_male() {
        LuckDirection::Forward
    } else {
        LuckDirection::Reverse
    }
}

/// Generate the eight luck pillars for a chart.
///
/// Pillar `i` (0-based) is `i + 1` steps from the month pillar in the
/// cycle direction and covers ages `3 + 10i ..= 12 + 10i`, i.e. calendar
/// years `birth_year + 3 + 10i ..= birth_year + 12 + 10i`, saturating at
/// `i32::MAX`.
pub fn compute_luck_cycle(chart: &Chart, gender: Gender, birth_year: i32) -> LuckCycle {
    let direction = luck_direction(chart.year.stem(), gender);
    let month_index = i64::from(chart.month.cycle_index());

    let mut pillars = Vec::with_capacity(LUCK_PILLAR_COUNT);
    for i in 0..LUCK_PILLAR_COUNT {
        let steps = i as i64 + 1;
        let span = i as u32 * LUCK_PILLAR_YEARS;
        let start_age = ONSET_AGE + span;
        let start_year = birth_year.saturating_add((ONSET_AGE + span) as i32);
        pillars.push(LuckPillar {
            order: (i as u8) + 1,
            pillar: Pillar::from_cycle_index(month_index + direction.step() * steps),
            start_age,
            end_age: start_age + LUCK_PILLAR_YEARS - 1,
            start_year,
            end_year: start_year.saturating_add(LUCK_PILLAR_YEARS as i32 - 1),
        });
    }

    LuckCycle {
        direction,
        onset_age: ONSET_AGE,
        pillars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::compute_chart;

    fn names(cycle: &LuckCycle) -> Vec<String> {
        cycle.pillars.iter().map(|p| p.pillar.to_string()).collect()
    }

    #[test]
    fn direction_table() {
        assert_eq!(luck_direction(Stem::Jia, Gender::Male), LuckDirection::Forward);
        assert_eq!(luck_direction(Stem::Yi, Gender::Male), LuckDirection::Reverse);
        assert_eq!(luck_direction(Stem::Jia, Gender::Female), LuckDirection::Reverse);
        assert_eq!(luck_direction(Stem::Yi, Gender::Female), LuckDirection::Forward);
    }

    #[test]
    fn reference_chart_forward() {
        let chart = compute_chart(1996, 3, 15, 10).unwrap();
        let cycle = compute_luck_cycle(&chart, Gender::Male, 1996);
        assert_eq!(cycle.direction, LuckDirection::Forward);
        assert_eq!(cycle.onset_age, 3);
        assert_eq!(
            names(&cycle),
            ["辛巳", "壬午", "癸未", "甲申", "乙酉", "丙戌", "丁亥", "戊子"]
        );
        let first = cycle.pillars[0];
        assert_eq!((first.start_age, first.end_age), (3, 12));
        assert_eq!((first.start_year, first.end_year), (1999, 2008));
        let last = cycle.pillars[7];
        assert_eq!(last.order, 8);
        assert_eq!((last.start_age, last.end_age), (73, 82));
        assert_eq!((last.start_year, last.end_year), (2069, 2078));
    }

    #[test]
    fn yin_year_male_reverse() {
        let chart = compute_chart(1985, 12, 25, 7).unwrap();
        let cycle = compute_luck_cycle(&chart, Gender::Male, 1985);
        assert_eq!(cycle.direction, LuckDirection::Reverse);
        assert_eq!(names(&cycle)[..2], ["丙子", "乙亥"]);
    }

    #[test]
    fn yang_year_female_reverse() {
        let chart = compute_chart(1990, 8, 20, 6).unwrap();
        let cycle = compute_luck_cycle(&chart, Gender::Female, 1990);
        assert_eq!(cycle.direction, LuckDirection::Reverse);
        assert_eq!(names(&cycle)[..2], ["戊申", "丁未"]);
    }

    #[test]
    fn consecutive_pillars_are_adjacent() {
        let chart = compute_chart(1990, 1, 8, 4).unwrap();
        let cycle = compute_luck_cycle(&chart, Gender::Female, 1990);
        for w in cycle.pillars.windows(2) {
            assert_eq!(w[0].pillar.advance(cycle.direction.step()), w[1].pillar);
            assert_eq!(w[0].end_age + 1, w[1].start_age);
        }
    }

    #[test]
    fn active_and_current() {
        let chart = compute_chart(1996, 3, 15, 10).unwrap();
        let cycle = compute_luck_cycle(&chart, Gender::Male, 1996);
        assert!(cycle.active_at(1).is_none());
        assert!(cycle.active_at(2).is_none());
        assert_eq!(cycle.active_at(3).map(|p| p.order), Some(1));
        assert_eq!(cycle.active_at(12).map(|p| p.order), Some(1));
        assert_eq!(cycle.active_at(13).map(|p| p.order), Some(2));
        assert!(cycle.active_at(83).is_none());
        // 2026 is virtual age 31
        assert_eq!(
            cycle.current(1996, 2026).map(|p| p.pillar.to_string()),
            Some("癸未".to_string())
        );
        assert!(cycle.current(1996, 1990).is_none());
    }

    #[test]
    fn extreme_birth_year_saturates() {
        let chart = compute_chart(1996, 3, 15, 10).unwrap();
        let cycle = compute_luck_cycle(&chart, Gender::Male, i32::MAX - 5);
        assert_eq!(cycle.pillars[0].start_year, i32::MAX - 2);
        assert_eq!(cycle.pillars[0].end_year, i32::MAX);
        assert_eq!(cycle.pillars[7].start_year, i32::MAX);
        assert_eq!(cycle.pillars[7].start_age, 73);
    }
}
