//! Julian Day Number bridge for the proleptic Gregorian calendar.
//!
//! Closed-form integer arithmetic, no month tables. The `100100` year offset
//! keeps every intermediate positive for any year above -100100.

use std::ops::RangeInclusive;

use chrono::Weekday;

use crate::arith::{div, modulo};
use crate::date::GregorianDate;

/// Converts a Gregorian date to its Julian Day Number.
///
/// Day values beyond the month length roll into the following month, which
/// is what the Jalaali converters rely on when passing a day of March.
pub fn g2d(gy: i32, gm: i32, gd: i32) -> i64 {
    let (gy, gm, gd) = (i64::from(gy), i64::from(gm), i64::from(gd));
    let shift = div(gm - 8, 6);
    let d = div((gy + shift + 100100) * 1461, 4) + div(153 * modulo(gm + 9, 12) + 2, 5) + gd
        - 34840408;
    d - div(div(gy + 100100 + shift, 100) * 3, 4) + 752
}

/// Julian Day Numbers on which [`d2g`] is exact: 1 January of year -100000
/// through 31 December of year 1000000.
pub const GREGORIAN_JDN_RANGE: RangeInclusive<i64> = -34_803_190..=366_963_925;

/// Converts a Julian Day Number to a Gregorian date. Exact inverse of [`g2d`]
/// on [`GREGORIAN_JDN_RANGE`]; day numbers outside it saturate to its ends.
pub fn d2g(jdn: i64) -> GregorianDate {
    let jdn = jdn.clamp(*GREGORIAN_JDN_RANGE.start(), *GREGORIAN_JDN_RANGE.end());
    let mut j = 4 * jdn + 139361631;
    j += div(div(4 * jdn + 183187720, 146097) * 3, 4) * 4 - 3908;
    let i = div(modulo(j, 1461), 4) * 5 + 308;
    let gd = div(modulo(i, 153), 5) + 1;
    let gm = modulo(div(i, 153), 12) + 1;
    let gy = div(j, 1461) - 100100 + div(8 - gm, 6);
    // Bounded by the clamp above.
    GregorianDate::from_parts(gy as i32, gm as u8, gd as u8)
}

/// Day of the week for a Julian Day Number.
pub fn weekday(jdn: i64) -> Weekday {
    match (jdn + 1).rem_euclid(7) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}
