//! Elemental tally and day-master strength.
//!
//! Each visible stem and branch adds 1 to its element; each hidden stem
//! adds 0.3. Weighted support and drain scores for the day master's
//! element decide the strength band:
//!
//! ```text
//! support = count[day] + 0.7 * count[producer]
//! drain   = count[overcomer] + 0.5 * count[produced] + 0.5 * count[overcome]
//! Strong   if support > drain + 2
//! Weak     if support < drain - 1
//! Balanced otherwise
//! ```
//!
//! Counts are held in tenths and scores in hundredths so the band edges
//! compare exactly.

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::element::{ALL_ELEMENTS, Element};

/// Day-master strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    Strong,
    Weak,
    Balanced,
}

impl Strength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Balanced => "Balanced",
        }
    }

    /// Chinese label (身强, 身弱, 中和).
    pub const fn chinese_name(self) -> &'static str {
        match self {
            Self::Strong => "身强",
            Self::Weak => "身弱",
            Self::Balanced => "中和",
        }
    }

    /// One-character form used inside readings (旺, 弱, 平).
    pub const fn short_chinese(self) -> &'static str {
        match self {
            Self::Strong => "旺",
            Self::Weak => "弱",
            Self::Balanced => "平",
        }
    }
}

/// Per-element tally of a chart, indexed by [`Element::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementCounts {
    /// Visible stems and branches; always sums to 8.
    pub visible: [u8; 5],
    /// Hidden stems, each worth 0.3.
    pub hidden: [u8; 5],
}

impl ElementCounts {
    /// Visible count for one element.
    pub const fn visible(&self, element: Element) -> u8 {
        self.visible[element.index() as usize]
    }

    /// Number of hidden stems of one element.
    pub const fn hidden(&self, element: Element) -> u8 {
        self.hidden[element.index() as usize]
    }

    /// Weighted count in tenths (visible x 10 + hidden x 3).
    pub const fn tenths(&self, element: Element) -> i32 {
        10 * self.visible(element) as i32 + 3 * self.hidden(element) as i32
    }

    /// Weighted count (visible + 0.3 per hidden stem).
    pub fn weighted(&self, element: Element) -> f64 {
        f64::from(self.tenths(element)) / 10.0
    }

    pub fn visible_total(&self) -> u8 {
        self.visible.iter().sum()
    }

    /// Element with the highest weighted count (first in cycle order on ties).
    pub fn dominant(&self) -> Element {
        let mut best = ALL_ELEMENTS[0];
        for e in ALL_ELEMENTS {
            if self.tenths(e) > self.tenths(best) {
                best = e;
            }
        }
        best
    }

    /// Elements with no visible presence.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.visible(e) == 0)
            .collect()
    }
}

/// Support and drain scores for a day-master element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthBalance {
    /// Support in hundredths.
    pub support_hundredths: i32,
    /// Drain in hundredths.
    pub drain_hundredths: i32,
}

impl StrengthBalance {
    pub fn support(&self) -> f64 {
        f64::from(self.support_hundredths) / 100.0
    }

    pub fn drain(&self) -> f64 {
        f64::from(self.drain_hundredths) / 100.0
    }

    pub const fn strength(&self) -> Strength {
        if self.support_hundredths > self.drain_hundredths + 200 {
            Strength::Strong
        } else if self.support_hundredths < self.drain_hundredths - 100 {
            Strength::Weak
        } else {
            Strength::Balanced
        }
    }
}

/// Tally visible and hidden elements over all four pillars.
pub fn count_elements(chart: &Chart) -> ElementCounts {
    let mut counts = ElementCounts::default();
    for pillar in chart.pillars() {
        counts.visible[pillar.stem().element().index() as usize] += 1;
        counts.visible[pillar.branch().element().index() as usize] += 1;
        for stem in pillar.branch().hidden_stems() {
            counts.hidden[stem.element().index() as usize] += 1;
        }
    }
    counts
}

/// Support and drain for `day` against precomputed counts.
pub fn strength_balance(counts: &ElementCounts, day: Element) -> StrengthBalance {
    let support = 10 * counts.tenths(day) + 7 * counts.tenths(day.produced_by());
    let drain = 10 * counts.tenths(day.overcome_by())
        + 5 * counts.tenths(day.produces())
        + 5 * counts.tenths(day.overcomes());
    StrengthBalance {
        support_hundredths: support,
        drain_hundredths: drain,
    }
}

/// Strength band for `day` against precomputed counts.
pub fn classify_balance(counts: &ElementCounts, day: Element) -> Strength {
    strength_balance(counts, day).strength()
}

/// Strength band of the chart's day master.
pub fn classify_strength(chart: &Chart) -> Strength {
    classify_balance(&count_elements(chart), chart.day_master().element())
}
