//! The 12 earthly branches and their hidden stems.
//!
//! Each branch carries its own element plus an ordered list of 2–3 hidden
//! stems, main qi first. The hidden stems here are the built-in table; an
//! external delegate may replace individual entries through
//! [`HiddenStemTable`](crate::hidden::HiddenStemTable).

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::CalendarError;
use crate::stem::Stem;

/// The 12 earthly branches, starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_SYMBOLS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Built-in hidden stems per branch, indexed by branch index.
const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Stem::Ren, Stem::Gui],
    &[Stem::Ji, Stem::Gui, Stem::Xin],
    &[Stem::Jia, Stem::Bing, Stem::Wu],
    &[Stem::Jia, Stem::Yi],
    &[Stem::Wu, Stem::Yi, Stem::Gui],
    &[Stem::Bing, Stem::Wu, Stem::Geng],
    &[Stem::Ding, Stem::Ji],
    &[Stem::Ji, Stem::Ding, Stem::Yi],
    &[Stem::Geng, Stem::Ren, Stem::Wu],
    &[Stem::Geng, Stem::Xin],
    &[Stem::Wu, Stem::Xin, Stem::Ding],
    &[Stem::Ren, Stem::Jia],
];

impl Branch {
    /// Chinese character of the branch.
    pub const fn symbol(self) -> &'static str {
        BRANCH_SYMBOLS[self.index() as usize]
    }

    /// Pinyin name of the branch.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal associated with the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Elemental class of the branch itself.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Tree,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// One-letter element tag used by report layouts.
    ///
    /// Case separates the two branches sharing an element; the four earth
    /// branches alternate e/E.
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::Zi => "w",
            Self::Chou => "e",
            Self::Yin => "T",
            Self::Mao => "t",
            Self::Chen => "E",
            Self::Si => "F",
            Self::Wu => "f",
            Self::Wei => "e",
            Self::Shen => "M",
            Self::You => "m",
            Self::Xu => "E",
            Self::Hai => "W",
        }
    }

    /// Built-in hidden stems, main qi first.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Branch at a cycle position, wrapping modulo 12.
    pub fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Look up a branch by its Chinese character.
    pub fn from_symbol(symbol: &str) -> Result<Self, CalendarError> {
        BRANCH_SYMBOLS
            .iter()
            .position(|s| *s == symbol.trim())
            .map(|i| ALL_BRANCHES[i])
            .ok_or_else(|| CalendarError::invalid(format!("unknown branch symbol {symbol:?}")))
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as i64), *b);
        }
    }

    #[test]
    fn hidden_stem_counts() {
        for b in ALL_BRANCHES {
            let n = b.hidden_stems().len();
            assert!((2..=3).contains(&n), "{b} has {n} hidden stems");
        }
    }

    #[test]
    fn main_qi_matches_branch_element() {
        for b in ALL_BRANCHES {
            assert_eq!(b.hidden_stems()[0].element(), b.element(), "{b}");
        }
    }

    #[test]
    fn short_codes() {
        assert_eq!(Branch::Zi.short_code(), "w");
        assert_eq!(Branch::Yin.short_code(), "T");
        assert_eq!(Branch::Hai.short_code(), "W");
    }

    #[test]
    fn symbol_round_trip_and_unknown() {
        for b in ALL_BRANCHES {
            assert_eq!(Branch::from_symbol(b.symbol()).unwrap(), b);
        }
        assert!(matches!(
            Branch::from_symbol("甲"),
            Err(CalendarError::InvalidInput(_))
        ));
    }
}
