//! Break-point leap engine.
//!
//! The Jalaali leap rule is not a fixed-period rule. Leap years follow
//! 33-year-ish cycles whose phase resets at the historical break years in
//! [`BREAKS`]; everything here is derived from that table.

use crate::arith::{div, modulo};
use crate::error::CalendarError;

/// Jalaali years at which the leap-cycle pattern resets.
///
/// Strictly increasing. The first entry is the earliest supported year and
/// the last entry is the first unsupported one.
#[rustfmt::skip]
pub const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181,
    1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394, 2456, 3178,
];

/// Earliest Jalaali year covered by [`BREAKS`].
pub const MIN_YEAR: i32 = BREAKS[0];

/// Latest Jalaali year covered by [`BREAKS`].
pub const MAX_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Difference between a Jalaali year and the Gregorian year it starts in.
pub(crate) const YEAR_OFFSET: i32 = 621;

/// Output of [`jal_cal`] for a single Jalaali year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalCalc {
    /// Years since the last leap year, `0..=4`. `0` means the year itself
    /// is leap. Always `0` when computed with `without_leap`.
    pub leap: u8,
    /// Gregorian year in which the Jalaali year begins.
    pub gy: i32,
    /// Day of March (of `gy`) on which 1 Farvardin falls.
    pub march: i32,
}

/// Locates `jy` in the break-point table and derives when its year starts.
///
/// When `without_leap` is set only `gy` and `march` are meaningful and the
/// refined leap indicator is skipped.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `jy` is before the first
/// break or at/after the last one.
pub fn jal_cal(jy: i32, without_leap: bool) -> Result<CalCalc, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&jy) {
        return Err(CalendarError::InvalidYear { year: jy });
    }

    let year = i64::from(jy);
    let mut leap_j: i64 = -14;
    let mut jp = i64::from(BREAKS[0]);
    let mut jump: i64 = 0;

    for &brk in &BREAKS[1..] {
        let jm = i64::from(brk);
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap_j += div(jump, 33) * 8 + div(modulo(jump, 33), 4);
        jp = jm;
    }
    let mut n = year - jp;

    leap_j += div(n, 33) * 8 + div(modulo(n, 33) + 3, 4);
    if modulo(jump, 33) == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let gy = jy + YEAR_OFFSET;
    let g = i64::from(gy);
    let leap_g = div(g, 4) - div((div(g, 100) + 1) * 3, 4) - 150;

    // 20 + (leap_j - leap_g) stays within a few days of the equinox.
    let march = (20 + leap_j - leap_g) as i32;

    if without_leap {
        return Ok(CalCalc { leap: 0, gy, march });
    }

    if jump - n < 6 {
        n = n - jump + div(jump + 4, 33) * 33;
    }
    let mut leap = modulo(modulo(n + 1, 33) - 1, 4);
    if leap == -1 {
        leap = 4;
    }

    Ok(CalCalc {
        leap: leap as u8,
        gy,
        march,
    })
}
