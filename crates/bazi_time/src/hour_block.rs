//! The twelve two-hour blocks of the traditional day.
//!
//! Block 0 starts at 23:00 of the previous civil day and runs to 00:59;
//! block 11 covers 21:00-22:59. The block index is also the index of
//! the hour pillar's earthly branch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Number of two-hour blocks in a day.
pub const HOUR_BLOCKS_PER_DAY: u8 = 12;

/// A two-hour block index in 0..=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HourBlock(u8);

/// All 12 blocks in order (index 0 = 23:00-00:59).
pub const ALL_HOUR_BLOCKS: [HourBlock; 12] = [
    HourBlock(0),
    HourBlock(1),
    HourBlock(2),
    HourBlock(3),
    HourBlock(4),
    HourBlock(5),
    HourBlock(6),
    HourBlock(7),
    HourBlock(8),
    HourBlock(9),
    HourBlock(10),
    HourBlock(11),
];

impl HourBlock {
    /// Create from a block index (0..=11).
    pub fn new(index: u8) -> Result<Self, TimeError> {
        if index < HOUR_BLOCKS_PER_DAY {
            Ok(Self(index))
        } else {
            Err(TimeError::InvalidHourBlock(index))
        }
    }

    /// Block containing a 24-hour clock hour (23 and 0 both map to block 0).
    pub fn from_clock_hour(hour: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidClockHour(hour));
        }
        Ok(Self((((hour + 1) / 2) % 12) as u8))
    }

    /// 0-based block index.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// First clock hour of the block (23 for block 0).
    pub const fn start_hour(self) -> u32 {
        (2 * self.0 as u32 + 23) % 24
    }

    /// Last clock hour of the block; the block ends at `end_hour():59`.
    pub const fn end_hour(self) -> u32 {
        (self.start_hour() + 1) % 24
    }
}

impl TryFrom<u8> for HourBlock {
    type Error = TimeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HourBlock> for u8 {
    fn from(value: HourBlock) -> Self {
        value.0
    }
}

impl fmt::Display for HourBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:59", self.start_hour(), self.end_hour())
    }
}
