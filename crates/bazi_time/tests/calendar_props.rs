//! Property tests for civil-date arithmetic and hour blocks.

use bazi_time::{CivilDate, HourBlock, days_between};
use proptest::prelude::*;

proptest! {
    #[test]
    fn offset_then_count_returns_offset(
        year in 1600i32..2400,
        month in 1u32..=12,
        day in 1u32..=28,
        delta in -40_000i64..40_000,
    ) {
        let origin = CivilDate::new(year, month, day).unwrap();
        let shifted = origin.offset_days(delta).unwrap();
        prop_assert_eq!(days_between(&origin, &shifted), delta);
        prop_assert_eq!(shifted.days_since(&origin), delta);
    }

    #[test]
    fn clock_hours_map_into_range(hour in 0u32..24) {
        let block = HourBlock::from_clock_hour(hour).unwrap();
        prop_assert!(block.index() < 12);
    }
}
