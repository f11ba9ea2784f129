//! The ten heavenly stems (tian gan).
//!
//! Stems pair off by element in production order: 甲乙 Wood, 丙丁 Fire,
//! 戊己 Earth, 庚辛 Metal, 壬癸 Water. Even indices are Yang.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_SYMBOLS: [char; 10] = [
    '甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸',
];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a cyclic index; any integer is reduced mod 10.
    pub const fn from_index(index: i64) -> Stem {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Stem written with the given character, if any.
    pub fn from_symbol(symbol: char) -> Option<Stem> {
        STEM_SYMBOLS
            .iter()
            .position(|&c| c == symbol)
            .map(|i| ALL_STEMS[i])
    }

    /// Chinese character.
    pub const fn symbol(self) -> char {
        STEM_SYMBOLS[self.index() as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Descriptive English name ("Yang Wood", "Yin Water", ...).
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Jia => "Yang Wood",
            Self::Yi => "Yin Wood",
            Self::Bing => "Yang Fire",
            Self::Ding => "Yin Fire",
            Self::Wu => "Yang Earth",
            Self::Ji => "Yin Earth",
            Self::Geng => "Yang Metal",
            Self::Xin => "Yin Metal",
            Self::Ren => "Yang Water",
            Self::Gui => "Yin Water",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self.polarity(), Polarity::Yang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn symbols_round_trip() {
        for s in ALL_STEMS {
            assert_eq!(Stem::from_symbol(s.symbol()), Some(s));
        }
        assert_eq!(Stem::from_symbol('子'), None);
    }

    #[test]
    fn from_index_wraps_both_ways() {
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Stem::from_index(-16), Stem::Wu);
    }

    #[test]
    fn element_pairs() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Xin.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn polarity_alternates() {
        assert!(Stem::Jia.is_yang());
        assert!(!Stem::Yi.is_yang());
        assert_eq!(Stem::Bing.polarity(), Polarity::Yang);
        assert_eq!(Stem::Gui.polarity(), Polarity::Yin);
    }

    #[test]
    fn english_name_matches_parts() {
        for s in ALL_STEMS {
            let expected = format!("{} {}", s.polarity().name(), s.element().name());
            assert_eq!(s.english_name(), expected);
        }
    }
}
