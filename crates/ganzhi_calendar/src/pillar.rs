//! Pillar calculation: Gregorian date/time to (stem, branch) pairs.
//!
//! Only the day pillar is exact. The year pillar switches on a fixed
//! February 4 boundary rather than the true Lichun solar term (which moves
//! by about a day between years), and the month pillar maps calendar months
//! to branches with a fixed shift instead of solar-term months. Both are
//! known precision limits, kept as-is for output parity.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::julian::{DAY_CYCLE_EPOCH_JDN, julian_day_number};
use crate::stem::Stem;

/// A stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a position of the 60-cycle (0 = 甲子), wrapping modulo 60.
    pub fn from_cycle_index(index: i64) -> Self {
        let idx = index.rem_euclid(60);
        Self::new(Stem::from_index(idx), Branch::from_index(idx))
    }

    /// Position of this pair in the 60-cycle.
    ///
    /// Returns `None` for pairs whose stem and branch parity differ, which
    /// never occur in the cycle (a delegate or [`MonthStemRule::CalendarMonth`]
    /// can produce them).
    pub fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// The four pillar positions of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// Rule for deriving the month stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthStemRule {
    /// `(yearStem * 2 + monthBranch) mod 10`.
    #[default]
    BranchOffset,
    /// `(yearStem * 2 + (month - 1)) mod 10`. Stem and branch parity
    /// differ under this rule, so its pillars fall outside the 60-cycle.
    CalendarMonth,
}

/// Year used for the year pillar: dates before February 4 belong to the
/// previous year.
pub fn adjusted_year(year: i32, month: u32, day: u32) -> i32 {
    if month < 2 || (month == 2 && day < 4) {
        year - 1
    } else {
        year
    }
}

/// Year-stem index of a calendar year, `(year - 4) mod 10`.
pub fn year_stem_index(year: i32) -> u8 {
    (year as i64 - 4).rem_euclid(10) as u8
}

/// Year pillar, switching years on February 4.
pub fn year_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let base = adjusted_year(year, month, day) as i64 - 4;
    Pillar::new(Stem::from_index(base), Branch::from_index(base))
}

/// Approximate month pillar.
///
/// Branch index is `(month + 10) mod 12` (January 亥, February 子, ...,
/// December 戌). The year stem feeding the month stem uses the unadjusted
/// calendar year.
pub fn month_pillar(year: i32, month: u32, rule: MonthStemRule) -> Pillar {
    let branch_index = (month as i64 + 10).rem_euclid(12);
    let ystem = year_stem_index(year) as i64;
    let offset = match rule {
        MonthStemRule::BranchOffset => branch_index,
        MonthStemRule::CalendarMonth => month as i64 - 1,
    };
    Pillar::new(
        Stem::from_index(ystem * 2 + offset),
        Branch::from_index(branch_index),
    )
}

/// Position (0..59) of a date in the 60-day cycle.
pub fn day_cycle_index(year: i32, month: u32, day: u32) -> u8 {
    (julian_day_number(year, month, day) - DAY_CYCLE_EPOCH_JDN).rem_euclid(60) as u8
}

/// Exact day pillar from the Julian Day Number.
pub fn day_pillar(year: i32, month: u32, day: u32) -> Pillar {
    Pillar::from_cycle_index(day_cycle_index(year, month, day) as i64)
}

/// Two-hour block (0..11) of a clock hour: 23:00–00:59 is block 0,
/// 01:00–02:59 block 1, and so on.
pub fn hour_block(hour: u32) -> u8 {
    if hour == 23 {
        0
    } else {
        ((hour + 1) / 2 % 12) as u8
    }
}

/// Hour pillar together with how it was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourPillar {
    pub pillar: Pillar,
    /// Two-hour block index (0..11), equal to the branch index.
    pub block: u8,
    /// Stem was derived without the day stem.
    pub degraded: bool,
}

/// Hour pillar for a clock hour.
///
/// The stem is `(dayStem * 2 + block) mod 10`. Without a day stem the
/// degraded rule `block mod 10` is used and flagged.
pub fn hour_pillar(hour: u32, day_stem: Option<Stem>) -> HourPillar {
    hour_pillar_for_block(hour_block(hour), day_stem)
}

/// Hour pillar for a known block (0..11), e.g. from a delegate's hour branch.
pub fn hour_pillar_for_block(block: u8, day_stem: Option<Stem>) -> HourPillar {
    let block = block % 12;
    let (stem, degraded) = match day_stem {
        Some(ds) => (Stem::from_index(ds.index() as i64 * 2 + block as i64), false),
        None => (Stem::from_index(block as i64), true),
    };
    if degraded {
        tracing::warn!(block, "hour stem derived without day stem");
    }
    HourPillar {
        pillar: Pillar::new(stem, Branch::from_index(block as i64)),
        block,
        degraded,
    }
}
