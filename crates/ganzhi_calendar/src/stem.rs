//! The 10 heavenly stems.
//!
//! Stems pair off by element in canonical element order: 甲乙 Tree,
//! 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::CalendarError;

/// The 10 heavenly stems, starting from Jia (甲).
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

/// All 10 stems in order (0 = Jia, 9 = Gui).
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

const STEM_SYMBOLS: [&str; 10] = [
    "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸",
];

impl Stem {
    /// Chinese character of the stem.
    pub const fn symbol(self) -> &'static str {
        STEM_SYMBOLS[self.index() as usize]
    }

    /// Pinyin name of the stem.
    pub const fn pinyin(self) -> &'static str {
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

    /// Elemental class of the stem.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Stem at a cycle position, wrapping modulo 10.
    pub fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Look up a stem by its Chinese character.
    pub fn from_symbol(symbol: &str) -> Result<Self, CalendarError> {
        STEM_SYMBOLS
            .iter()
            .position(|s| *s == symbol.trim())
            .map(|i| ALL_STEMS[i])
            .ok_or_else(|| CalendarError::invalid(format!("unknown stem symbol {symbol:?}")))
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
