//! Luck-cycle (da yun) scheduling.
//!
//! Eight ten-year luck pillars step through the sexagenary cycle from
//! the month pillar, forward or in reverse depending on the year stem's
//! polarity and the native's gender. The onset age is fixed at 3.

pub mod cycle;
pub mod types;

pub use cycle::{compute_luck_cycle, luck_direction};
pub use types::{
    Gender, LUCK_PILLAR_COUNT, LUCK_PILLAR_YEARS, LuckCycle, LuckDirection, LuckPillar, ONSET_AGE,
};
