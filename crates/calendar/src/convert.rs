//! Calendar converters composed from the leap engine and the JDN bridge.
//!
//! Jalaali and Gregorian dates never convert into each other directly;
//! both go through a Julian Day Number.

use std::ops::RangeInclusive;

use crate::arith::{div, modulo};
use crate::breaks::{MAX_YEAR, MIN_YEAR, YEAR_OFFSET, jal_cal};
use crate::date::{GregorianDate, JalaaliDate, JalaaliWeek, day_of_year_offset};
use crate::error::CalendarError;
use crate::jdn::{d2g, g2d, weekday};

/// Days in Farvardin through Shahrivar (six 31-day months).
const FIRST_HALF_DAYS: i64 = 186;

/// Converts a Jalaali date to a Julian Day Number.
///
/// Month and day are not range-checked; out-of-range values extend linearly.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `jy` is outside the
/// break-point table.
pub fn j2d(jy: i32, jm: u8, jd: u8) -> Result<i64, CalendarError> {
    let r = jal_cal(jy, true)?;
    Ok(g2d(r.gy, 3, r.march) + day_of_year_offset(jm, jd))
}

/// Converts a Julian Day Number to a Jalaali date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] for a day outside
/// [`supported_jdn_range`], naming the year just past the violated end.
pub fn d2j(jdn: i64) -> Result<JalaaliDate, CalendarError> {
    let range = supported_jdn_range();
    if jdn < *range.start() {
        return Err(CalendarError::InvalidYear { year: MIN_YEAR - 1 });
    }
    if jdn > *range.end() {
        return Err(CalendarError::InvalidYear { year: MAX_YEAR + 1 });
    }

    let gy = d2g(jdn).year();
    let mut jy = gy - YEAR_OFFSET;
    let r = jal_cal(jy, false)?;
    let farvardin_1 = g2d(gy, 3, r.march);

    let mut k = jdn - farvardin_1;
    if k >= 0 {
        if k < FIRST_HALF_DAYS {
            let jm = 1 + div(k, 31);
            let jd = modulo(k, 31) + 1;
            return Ok(JalaaliDate::from_parts(jy, jm as u8, jd as u8));
        }
        k -= FIRST_HALF_DAYS;
    } else {
        // Before 1 Farvardin: the tail of the previous year. `r.leap == 1`
        // means the previous year was leap and its Esfand has 30 days.
        jy -= 1;
        k += 179;
        if r.leap == 1 {
            k += 1;
        }
    }
    let jm = 7 + div(k, 30);
    let jd = modulo(k, 30) + 1;
    Ok(JalaaliDate::from_parts(jy, jm as u8, jd as u8))
}

/// Julian Day Numbers accepted by [`d2j`].
///
/// Starts at 1 Farvardin of [`MIN_YEAR`] and ends on the last day of the
/// Gregorian year that [`MAX_YEAR`] begins in. The final days of Esfand of
/// `MAX_YEAR` fall past the end.
pub fn supported_jdn_range() -> RangeInclusive<i64> {
    let first = jal_cal(MIN_YEAR, true).map_or(i64::MIN, |r| g2d(r.gy, 3, r.march));
    let last = g2d(MAX_YEAR + YEAR_OFFSET, 12, 31);
    first..=last
}

/// Converts a Gregorian date to a Jalaali date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if the date falls outside the
/// break-point table.
///
/// # Examples
///
/// ```
/// use jalaali_calendar::to_jalaali;
///
/// let date = to_jalaali(2023, 10, 27).unwrap();
/// assert_eq!(date.ymd(), (1402, 8, 5));
/// ```
pub fn to_jalaali(gy: i32, gm: u8, gd: u8) -> Result<JalaaliDate, CalendarError> {
    d2j(g2d(gy, i32::from(gm), i32::from(gd)))
}

/// Converts a Jalaali date to a Gregorian date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `jy` is outside the
/// break-point table.
///
/// # Examples
///
/// ```
/// use jalaali_calendar::to_gregorian;
///
/// let date = to_gregorian(1402, 8, 5).unwrap();
/// assert_eq!(date.ymd(), (2023, 10, 27));
/// ```
pub fn to_gregorian(jy: i32, jm: u8, jd: u8) -> Result<GregorianDate, CalendarError> {
    Ok(d2g(j2d(jy, jm, jd)?))
}

/// Returns `true` if `jy` is a Jalaali leap year (30-day Esfand).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `jy` is outside the
/// break-point table.
pub fn is_leap_jalaali_year(jy: i32) -> Result<bool, CalendarError> {
    Ok(jal_cal(jy, false)?.leap == 0)
}

/// Number of days in a Jalaali month: 31, 30, or 29.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `jm` is not in 1..=12 and
/// [`CalendarError::InvalidYear`] if Esfand is requested for a year outside
/// the break-point table.
pub fn jalaali_month_length(jy: i32, jm: u8) -> Result<u8, CalendarError> {
    match jm {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 if is_leap_jalaali_year(jy)? => Ok(30),
        12 => Ok(29),
        _ => Err(CalendarError::InvalidMonth { month: jm }),
    }
}

/// Returns `true` if `(jy, jm, jd)` names an existing Jalaali date.
///
/// Never fails: out-of-range years simply report `false`.
pub fn is_valid_jalaali_date(jy: i32, jm: u8, jd: u8) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&jy)
        && jalaali_month_length(jy, jm).is_ok_and(|max| (1..=max).contains(&jd))
}

/// Returns the Saturday and Friday bounding the week that contains the date.
///
/// # Errors
///
/// Returns [`CalendarError`] if the date is invalid or either end of the
/// week leaves the supported range.
pub fn jalaali_week(jy: i32, jm: u8, jd: u8) -> Result<JalaaliWeek, CalendarError> {
    let jdn = JalaaliDate::new(jy, jm, jd)?.to_jdn();
    let since_saturday = i64::from((weekday(jdn).num_days_from_sunday() + 1) % 7);
    let saturday = d2j(jdn - since_saturday)?;
    let friday = d2j(jdn - since_saturday + 6)?;
    Ok(JalaaliWeek { saturday, friday })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        assert_eq!(to_jalaali(2023, 10, 27).unwrap().ymd(), (1402, 8, 5));
        assert_eq!(to_gregorian(1402, 8, 5).unwrap().ymd(), (2023, 10, 27));
        assert_eq!(to_jalaali(2021, 3, 21).unwrap().ymd(), (1400, 1, 1));
    }

    #[test]
    fn day_before_nowruz_is_previous_year() {
        assert_eq!(to_jalaali(2021, 3, 20).unwrap().ymd(), (1399, 12, 30));
        assert_eq!(to_jalaali(2023, 3, 20).unwrap().ymd(), (1401, 12, 29));
    }

    #[test]
    fn half_year_boundary() {
        assert_eq!(to_gregorian(1402, 6, 31).unwrap().ymd(), (2023, 9, 22));
        assert_eq!(to_gregorian(1402, 7, 1).unwrap().ymd(), (2023, 9, 23));
    }

    #[test]
    fn j2d_d2j_consistent() {
        let jdn = j2d(1402, 8, 5).unwrap();
        assert_eq!(d2j(jdn).unwrap().ymd(), (1402, 8, 5));
        assert_eq!(d2j(jdn + 1).unwrap().ymd(), (1402, 8, 6));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(jalaali_month_length(1393, 1).unwrap(), 31);
        assert_eq!(jalaali_month_length(1393, 4).unwrap(), 31);
        assert_eq!(jalaali_month_length(1393, 7).unwrap(), 30);
        assert_eq!(jalaali_month_length(1393, 10).unwrap(), 30);
        assert_eq!(jalaali_month_length(1393, 12).unwrap(), 29);
        assert_eq!(jalaali_month_length(1394, 12).unwrap(), 29);
        assert_eq!(jalaali_month_length(1395, 12).unwrap(), 30);
    }

    #[test]
    fn month_length_invalid_month() {
        assert_eq!(
            jalaali_month_length(1402, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn leap_years() {
        assert!(!is_leap_jalaali_year(1393).unwrap());
        assert!(!is_leap_jalaali_year(1394).unwrap());
        assert!(is_leap_jalaali_year(1395).unwrap());
        assert!(!is_leap_jalaali_year(1396).unwrap());
        assert!(is_leap_jalaali_year(1399).unwrap());
        assert!(is_leap_jalaali_year(1403).unwrap());
        assert!(!is_leap_jalaali_year(1404).unwrap());
        assert!(is_leap_jalaali_year(1408).unwrap());
    }

    #[test]
    fn validity() {
        assert!(!is_valid_jalaali_date(-62, 12, 29));
        assert!(is_valid_jalaali_date(-61, 1, 1));
        assert!(!is_valid_jalaali_date(3178, 1, 1));
        assert!(is_valid_jalaali_date(3177, 12, 29));
        assert!(!is_valid_jalaali_date(1393, 0, 1));
        assert!(!is_valid_jalaali_date(1393, 13, 1));
        assert!(!is_valid_jalaali_date(1393, 1, 0));
        assert!(!is_valid_jalaali_date(1393, 1, 32));
        assert!(is_valid_jalaali_date(1393, 1, 31));
        assert!(!is_valid_jalaali_date(1393, 11, 31));
        assert!(is_valid_jalaali_date(1393, 11, 30));
        assert!(!is_valid_jalaali_date(1393, 12, 30));
        assert!(is_valid_jalaali_date(1393, 12, 29));
        assert!(is_valid_jalaali_date(1395, 12, 30));
    }

    #[test]
    fn week_across_nowruz() {
        // 1400/1/1 is a Sunday.
        let week = jalaali_week(1400, 1, 1).unwrap();
        assert_eq!(week.saturday.ymd(), (1399, 12, 30));
        assert_eq!(week.friday.ymd(), (1400, 1, 6));
    }

    #[test]
    fn week_starting_on_saturday() {
        // 2023-10-28 (1402/8/6) is a Saturday.
        let week = jalaali_week(1402, 8, 6).unwrap();
        assert_eq!(week.saturday.ymd(), (1402, 8, 6));
        assert_eq!(week.friday.ymd(), (1402, 8, 12));
    }

    #[test]
    fn supported_range_edges() {
        let range = supported_jdn_range();
        assert_eq!(d2j(*range.start()).unwrap().ymd(), (-61, 1, 1));
        assert_eq!(d2g(*range.end()).ymd(), (3798, 12, 31));
        assert!(d2j(*range.end()).is_ok());
        assert!(d2j(range.start() - 1).is_err());
        assert!(d2j(range.end() + 1).is_err());
    }

    #[test]
    fn far_day_numbers_rejected() {
        let jdn = j2d(1402, 8, 5).unwrap();
        assert_eq!(
            d2j(jdn + 1_568_704_592_128).unwrap_err(),
            CalendarError::InvalidYear { year: 3178 }
        );
        assert_eq!(
            d2j(i64::MAX).unwrap_err(),
            CalendarError::InvalidYear { year: 3178 }
        );
        assert_eq!(
            d2j(i64::MIN).unwrap_err(),
            CalendarError::InvalidYear { year: -62 }
        );
    }

    #[test]
    fn out_of_range_propagates() {
        assert_eq!(
            to_gregorian(3178, 1, 1).unwrap_err(),
            CalendarError::InvalidYear { year: 3178 }
        );
        assert!(to_jalaali(10000, 1, 1).is_err());
        assert!(is_leap_jalaali_year(-62).is_err());
    }
}
