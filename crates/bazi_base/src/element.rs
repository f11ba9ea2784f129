//! The five elements (wu xing), their cycles, and yin/yang polarity.
//!
//! Production cycle: Wood -> Fire -> Earth -> Metal -> Water -> Wood.
//! Domination cycle: Wood -> Earth -> Water -> Fire -> Metal -> Wood.

use serde::{Deserialize, Serialize};

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in production-cycle order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in production-cycle order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Chinese character.
    pub const fn symbol(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// The element this one produces.
    pub const fn produces(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element that produces this one.
    pub const fn produced_by(self) -> Element {
        ALL_ELEMENTS[((self.index() + 4) % 5) as usize]
    }

    /// The element this one overcomes.
    pub const fn overcomes(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// The element that overcomes this one.
    pub const fn overcome_by(self) -> Element {
        ALL_ELEMENTS[((self.index() + 3) % 5) as usize]
    }
}

/// Yin/yang polarity of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn symbol(self) -> char {
        match self {
            Self::Yang => '阳',
            Self::Yin => '阴',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn production_cycle() {
        assert_eq!(Element::Wood.produces(), Element::Fire);
        assert_eq!(Element::Fire.produces(), Element::Earth);
        assert_eq!(Element::Earth.produces(), Element::Metal);
        assert_eq!(Element::Metal.produces(), Element::Water);
        assert_eq!(Element::Water.produces(), Element::Wood);
    }

    #[test]
    fn domination_cycle() {
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
        assert_eq!(Element::Earth.overcomes(), Element::Water);
        assert_eq!(Element::Water.overcomes(), Element::Fire);
        assert_eq!(Element::Fire.overcomes(), Element::Metal);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
    }

    #[test]
    fn inverse_relations() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.produces().produced_by(), e);
            assert_eq!(e.overcomes().overcome_by(), e);
        }
    }

    #[test]
    fn each_element_has_five_distinct_relatives() {
        for e in ALL_ELEMENTS {
            let mut seen = [
                e,
                e.produces(),
                e.produced_by(),
                e.overcomes(),
                e.overcome_by(),
            ]
            .map(Element::index);
            seen.sort_unstable();
            assert_eq!(seen, [0, 1, 2, 3, 4], "element {e:?}");
        }
    }
}
