//! The five elements and their generate/control cycles.
//!
//! Generating cycle: Tree → Fire → Earth → Metal → Water → Tree.
//! Controlling cycle: Tree → Earth → Water → Fire → Metal → Tree
//! (each element restrains the one two steps ahead in the generating cycle).

use serde::{Deserialize, Serialize};

/// The five elemental classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Tree,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in canonical order (0 = Tree, 4 = Water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Tree,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tree => "Tree",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character for the element.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Tree => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index into [`ALL_ELEMENTS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Tree => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a canonical index, wrapping modulo 5.
    pub const fn from_index(index: u8) -> Self {
        ALL_ELEMENTS[(index % 5) as usize]
    }

    /// The element this one generates (feeds).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one controls.
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that controls this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
