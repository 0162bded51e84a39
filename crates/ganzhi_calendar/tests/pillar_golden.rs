//! Golden tests for pillar calculation.
//!
//! Pure-math tests (no external data needed).

use ganzhi_calendar::{
    Branch, CalendarError, MonthStemRule, Pillar, Stem, compute_chart, day_cycle_index,
    day_pillar, hour_block, hour_pillar, julian_day_number, month_pillar, year_pillar,
};

// ---------------------------------------------------------------------------
// Day pillar
// ---------------------------------------------------------------------------

#[test]
fn day_epoch_fixes_cycle_start() {
    assert_eq!(day_pillar(1984, 2, 2), Pillar::new(Stem::Jia, Branch::Zi));
    assert_eq!(day_cycle_index(1984, 2, 2), 0);
}

#[test]
fn day_pillar_periodic_over_60_days() {
    // Walk a few hundred consecutive days across month and year ends.
    let mut dates = Vec::new();
    for year in [1899, 1999, 2000, 2024] {
        for month in 1..=12u32 {
            for day in [1u32, 15, 28] {
                dates.push((year, month, day));
            }
        }
    }
    for (y, m, d) in dates {
        let jdn = julian_day_number(y, m, d);
        // Day-of-month overflow keeps the JDN linear, so d + 60 is 60 days later.
        let later = julian_day_number(y, m, d + 60);
        assert_eq!(later - jdn, 60);
        assert_eq!(day_pillar(y, m, d), day_pillar(y, m, d + 60), "{y}-{m}-{d}");
    }
}

#[test]
fn day_pillar_known_values() {
    // Offsets from the 1984-02-02 epoch:
    // 1976-09-04 → JDN 2443026, index 53 → 丁巳
    // 2000-01-01 → JDN 2451545, index 52 → 丙辰
    // 2024-02-10 → JDN 2460351, index 38 → 壬寅
    assert_eq!(julian_day_number(1976, 9, 4), 2_443_026);
    assert_eq!(day_cycle_index(1976, 9, 4), 53);
    assert_eq!(day_pillar(1976, 9, 4), Pillar::new(Stem::Ding, Branch::Si));
    assert_eq!(day_pillar(2000, 1, 1), Pillar::new(Stem::Bing, Branch::Chen));
    assert_eq!(day_pillar(2024, 2, 10), Pillar::new(Stem::Ren, Branch::Yin));
}

#[test]
fn day_pillar_before_epoch_is_non_negative() {
    assert_eq!(day_cycle_index(1984, 2, 1), 59);
    assert_eq!(day_cycle_index(1900, 1, 1), 8);
}

// ---------------------------------------------------------------------------
// Year and month pillars
// ---------------------------------------------------------------------------

#[test]
fn year_pillar_1976() {
    // (1976 - 4) % 10 = 2 → 丙, (1976 - 4) % 12 = 4 → 辰
    assert_eq!(year_pillar(1976, 9, 4), Pillar::new(Stem::Bing, Branch::Chen));
}

#[test]
fn year_pillar_february_boundary() {
    assert_eq!(year_pillar(2024, 2, 3), Pillar::new(Stem::Gui, Branch::Mao));
    assert_eq!(year_pillar(2024, 2, 4), Pillar::new(Stem::Jia, Branch::Chen));
}

#[test]
fn month_branch_sweep() {
    let expected = [
        Branch::Hai,
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
    ];
    for (i, b) in expected.iter().enumerate() {
        let p = month_pillar(2001, i as u32 + 1, MonthStemRule::BranchOffset);
        assert_eq!(p.branch, *b, "month {}", i + 1);
    }
}

#[test]
fn month_stem_uses_unadjusted_year() {
    // January 2024 still takes the 2024 year stem 甲 (0): (0 + 11) % 10 → 乙
    assert_eq!(
        month_pillar(2024, 1, MonthStemRule::BranchOffset),
        Pillar::new(Stem::Yi, Branch::Hai)
    );
}

// ---------------------------------------------------------------------------
// Hour pillar
// ---------------------------------------------------------------------------

#[test]
fn hour_23_and_0_share_zi() {
    assert_eq!(hour_pillar(23, Some(Stem::Jia)).pillar.branch, Branch::Zi);
    assert_eq!(hour_pillar(0, Some(Stem::Jia)).pillar.branch, Branch::Zi);
    assert_eq!(hour_pillar(1, Some(Stem::Jia)).pillar.branch, Branch::Chou);
    assert_eq!(hour_pillar(2, Some(Stem::Jia)).pillar.branch, Branch::Chou);
}

#[test]
fn hour_block_monotonic() {
    let mut prev = hour_block(1);
    for h in 2..=22 {
        let b = hour_block(h);
        assert!(b >= prev, "block at {h} decreased");
        prev = b;
    }
}

#[test]
fn hour_stem_cycle_for_jia_day() {
    // Jia day: 甲子 at midnight, 丙寅 at 03:00, 乙亥 at 21:00
    assert_eq!(hour_pillar(0, Some(Stem::Jia)).pillar, Pillar::new(Stem::Jia, Branch::Zi));
    assert_eq!(hour_pillar(3, Some(Stem::Jia)).pillar, Pillar::new(Stem::Bing, Branch::Yin));
    assert_eq!(hour_pillar(21, Some(Stem::Jia)).pillar, Pillar::new(Stem::Yi, Branch::Hai));
}

// ---------------------------------------------------------------------------
// Full chart
// ---------------------------------------------------------------------------

#[test]
fn chart_1976_09_04_0100() {
    let chart = compute_chart(1976, 9, 4, 1, 0).unwrap();
    assert_eq!(chart.year(), Pillar::new(Stem::Bing, Branch::Chen));
    assert_eq!(chart.month(), Pillar::new(Stem::Yi, Branch::Wei));
    assert_eq!(chart.day(), Pillar::new(Stem::Ding, Branch::Si));
    assert_eq!(chart.hour(), Pillar::new(Stem::Xin, Branch::Chou));
    assert_eq!(chart.day_master(), Stem::Ding);
}

#[test]
fn chart_rejects_bad_hour() {
    assert!(matches!(
        compute_chart(1976, 9, 4, 25, 0),
        Err(CalendarError::InvalidInput(_))
    ));
}

#[test]
fn every_computed_pillar_is_in_cycle() {
    for month in 1..=12 {
        for hour in 0..24 {
            let chart = compute_chart(1990, month, 10, hour, 0).unwrap();
            for (pos, p) in chart.pillars() {
                assert!(p.cycle_index().is_some(), "{pos:?} {p} out of cycle");
            }
        }
    }
}
