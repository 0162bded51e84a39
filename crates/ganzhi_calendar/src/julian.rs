//! Integer Julian Day Number for proleptic Gregorian dates.

/// JDN of 1984-02-02, the day defined as position 0 (甲子) of the day cycle.
pub const DAY_CYCLE_EPOCH_JDN: i64 = 2_445_733;

/// Julian Day Number of a Gregorian civil date.
///
/// Standard integer formula (Fliegel–Van Flandern form):
/// `a = (14 - month) / 12`, `y = year + 4800 - a`, `m = month + 12a - 3`,
/// `JDN = day + (153m + 2)/5 + 365y + y/4 - y/100 + y/400 - 32045`,
/// with every division floored.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}
