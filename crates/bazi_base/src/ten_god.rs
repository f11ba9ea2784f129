//! Ten-God (shi shen) relations between the day master and another stem.
//!
//! The relation follows from which of the five element relations holds
//! (same, produces me, I produce, overcomes me, I overcome) and whether
//! the two stems share polarity.

use serde::{Deserialize, Serialize};

use crate::stem::Stem;

/// The ten relations of a stem to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// Same element, same polarity (比肩).
    Companion,
    /// Same element, opposite polarity (劫财).
    RivalWealth,
    /// Produces the day master, same polarity (偏印).
    IndirectSeal,
    /// Produces the day master, opposite polarity (正印).
    DirectSeal,
    /// Produced by the day master, same polarity (食神).
    EatingGod,
    /// Produced by the day master, opposite polarity (伤官).
    HurtingOfficer,
    /// Overcomes the day master, same polarity (偏官).
    IndirectOfficer,
    /// Overcomes the day master, opposite polarity (正官).
    DirectOfficer,
    /// Overcome by the day master, same polarity (偏财).
    IndirectWealth,
    /// Overcome by the day master, opposite polarity (正财).
    DirectWealth,
}

/// All 10 relations.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Companion,
    TenGod::RivalWealth,
    TenGod::IndirectSeal,
    TenGod::DirectSeal,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectOfficer,
    TenGod::DirectOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
];

impl TenGod {
    pub const fn index(self) -> u8 {
        match self {
            Self::Companion => 0,
            Self::RivalWealth => 1,
            Self::IndirectSeal => 2,
            Self::DirectSeal => 3,
            Self::EatingGod => 4,
            Self::HurtingOfficer => 5,
            Self::IndirectOfficer => 6,
            Self::DirectOfficer => 7,
            Self::IndirectWealth => 8,
            Self::DirectWealth => 9,
        }
    }

    /// Chinese name.
    pub const fn chinese_name(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RivalWealth => "劫财",
            Self::IndirectSeal => "偏印",
            Self::DirectSeal => "正印",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectOfficer => "偏官",
            Self::DirectOfficer => "正官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::RivalWealth => "Rival-Wealth",
            Self::IndirectSeal => "Indirect-Seal",
            Self::DirectSeal => "Direct-Seal",
            Self::EatingGod => "Eating-God",
            Self::HurtingOfficer => "Hurting-Officer",
            Self::IndirectOfficer => "Indirect-Officer",
            Self::DirectOfficer => "Direct-Officer",
            Self::IndirectWealth => "Indirect-Wealth",
            Self::DirectWealth => "Direct-Wealth",
        }
    }
}

/// Relation of `other` to `day_master`.
pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let me = day_master.element();
    let it = other.element();
    let same = day_master.polarity() == other.polarity();
    let pick = |same_polarity: TenGod, opposite: TenGod| {
        if same { same_polarity } else { opposite }
    };
    if it == me {
        pick(TenGod::Companion, TenGod::RivalWealth)
    } else if it == me.produced_by() {
        pick(TenGod::IndirectSeal, TenGod::DirectSeal)
    } else if it == me.produces() {
        pick(TenGod::EatingGod, TenGod::HurtingOfficer)
    } else if it == me.overcome_by() {
        pick(TenGod::IndirectOfficer, TenGod::DirectOfficer)
    } else {
        pick(TenGod::IndirectWealth, TenGod::DirectWealth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn jia_against_every_stem() {
        let got: Vec<&str> = ALL_STEMS
            .iter()
            .map(|&s| ten_god(Stem::Jia, s).chinese_name())
            .collect();
        assert_eq!(
            got,
            [
                "比肩", "劫财", "食神", "伤官", "偏财", "正财", "偏官", "正官", "偏印", "正印"
            ]
        );
    }

    #[test]
    fn xin_sees_wu_as_direct_seal() {
        assert_eq!(ten_god(Stem::Xin, Stem::Wu), TenGod::DirectSeal);
    }

    #[test]
    fn self_is_companion() {
        for s in ALL_STEMS {
            assert_eq!(ten_god(s, s), TenGod::Companion);
        }
    }

    #[test]
    fn every_day_master_sees_all_ten() {
        for dm in ALL_STEMS {
            let mut seen: Vec<u8> = ALL_STEMS.iter().map(|&s| ten_god(dm, s).index()).collect();
            seen.sort_unstable();
            assert_eq!(seen, (0..10).collect::<Vec<u8>>(), "day master {dm:?}");
        }
    }
}
