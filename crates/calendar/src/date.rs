//! Plain calendar date values.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::breaks::{CalCalc, MAX_YEAR, MIN_YEAR, jal_cal};
use crate::convert::{d2j, jalaali_month_length};
use crate::error::CalendarError;
use crate::jdn::{d2g, g2d, weekday};

/// A date in the Jalaali (Persian solar Hijri) calendar.
///
/// Every `JalaaliDate` handed out by this crate holds a year inside
/// `MIN_YEAR..=MAX_YEAR` and a day that exists in its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "JalaaliFields"))]
pub struct JalaaliDate {
    jy: i32,
    jm: u8,
    jd: u8,
}

impl JalaaliDate {
    /// Creates a new `JalaaliDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if the year is outside the
    /// break-point table, [`CalendarError::InvalidMonth`] if the month is not
    /// in 1..=12, and [`CalendarError::InvalidDay`] if the day does not exist
    /// in that month.
    pub fn new(jy: i32, jm: u8, jd: u8) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&jy) {
            return Err(CalendarError::InvalidYear { year: jy });
        }
        let max_day = jalaali_month_length(jy, jm)?;
        if !(1..=max_day).contains(&jd) {
            return Err(CalendarError::InvalidDay {
                day: jd,
                month: jm,
                max_day,
            });
        }
        Ok(Self { jy, jm, jd })
    }

    pub(crate) const fn from_parts(jy: i32, jm: u8, jd: u8) -> Self {
        Self { jy, jm, jd }
    }

    /// Converts a Julian Day Number to a Jalaali date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if the day falls outside the
    /// supported range.
    pub fn from_jdn(jdn: i64) -> Result<Self, CalendarError> {
        d2j(jdn)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.jy
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.jm
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.jd
    }

    /// Returns `(year, month, day)` as a tuple.
    pub fn ymd(self) -> (i32, u8, u8) {
        (self.jy, self.jm, self.jd)
    }

    fn cal(self, without_leap: bool) -> CalCalc {
        // The year was range-checked by every constructor.
        jal_cal(self.jy, without_leap).expect("JalaaliDate always holds a supported year")
    }

    /// Returns the Julian Day Number of this date.
    pub fn to_jdn(self) -> i64 {
        let r = self.cal(true);
        g2d(r.gy, 3, r.march) + day_of_year_offset(self.jm, self.jd)
    }

    /// Returns the Gregorian date for the same day.
    pub fn to_gregorian(self) -> GregorianDate {
        d2g(self.to_jdn())
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        weekday(self.to_jdn())
    }

    /// Returns `true` if the year of this date has a 30-day Esfand.
    pub fn is_leap_year(self) -> bool {
        self.cal(false).leap == 0
    }

    /// Returns the number of days in the month of this date.
    pub fn days_in_month(self) -> u8 {
        match self.jm {
            1..=6 => 31,
            7..=11 => 30,
            _ if self.is_leap_year() => 30,
            _ => 29,
        }
    }

    /// Returns the day of the year (1..=366).
    pub fn ordinal(self) -> u16 {
        (day_of_year_offset(self.jm, self.jd) + 1) as u16
    }
}

/// Days between 1 Farvardin and the given month/day.
///
/// Months 1..=6 have 31 days; from month 7 on each earlier month past the
/// sixth is one day shorter.
pub(crate) fn day_of_year_offset(jm: u8, jd: u8) -> i64 {
    let (jm, jd) = (i64::from(jm), i64::from(jd));
    (jm - 1) * 31 - (jm / 7) * (jm - 7) + jd - 1
}

impl fmt::Display for JalaaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.jy, self.jm, self.jd)
    }
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GregorianFields"))]
pub struct GregorianDate {
    gy: i32,
    gm: u8,
    gd: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if the month is not in 1..=12
    /// and [`CalendarError::InvalidDay`] if the day does not exist in that
    /// month.
    pub fn new(gy: i32, gm: u8, gd: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&gm) {
            return Err(CalendarError::InvalidMonth { month: gm });
        }
        let max_day = gregorian_month_length(gy, gm);
        if !(1..=max_day).contains(&gd) {
            return Err(CalendarError::InvalidDay {
                day: gd,
                month: gm,
                max_day,
            });
        }
        Ok(Self { gy, gm, gd })
    }

    pub(crate) const fn from_parts(gy: i32, gm: u8, gd: u8) -> Self {
        Self { gy, gm, gd }
    }

    /// Converts a Julian Day Number to a Gregorian date.
    pub fn from_jdn(jdn: i64) -> Self {
        d2g(jdn)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.gy
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.gm
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.gd
    }

    /// Returns `(year, month, day)` as a tuple.
    pub fn ymd(self) -> (i32, u8, u8) {
        (self.gy, self.gm, self.gd)
    }

    /// Returns the Julian Day Number of this date.
    pub fn to_jdn(self) -> i64 {
        g2d(self.gy, i32::from(self.gm), i32::from(self.gd))
    }

    /// Returns the Jalaali date for the same day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if the day falls outside the
    /// Jalaali break-point table.
    pub fn to_jalaali(self) -> Result<JalaaliDate, CalendarError> {
        d2j(self.to_jdn())
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        weekday(self.to_jdn())
    }

    /// Returns the equivalent `chrono` date, or `None` outside chrono's range.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.gy, u32::from(self.gm), u32::from(self.gd))
    }
}

/// Number of days in a Gregorian month, derived from the JDN bridge.
pub(crate) fn gregorian_month_length(gy: i32, gm: u8) -> u8 {
    let gm = i32::from(gm);
    (g2d(gy, gm + 1, 1) - g2d(gy, gm, 1)) as u8
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_parts(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.gy, self.gm, self.gd)
    }
}

/// The Saturday-to-Friday week containing a Jalaali date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JalaaliWeek {
    /// First day of the week.
    pub saturday: JalaaliDate,
    /// Last day of the week.
    pub friday: JalaaliDate,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct JalaaliFields {
    jy: i32,
    jm: u8,
    jd: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<JalaaliFields> for JalaaliDate {
    type Error = CalendarError;

    fn try_from(f: JalaaliFields) -> Result<Self, Self::Error> {
        Self::new(f.jy, f.jm, f.jd)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GregorianFields {
    gy: i32,
    gm: u8,
    gd: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<GregorianFields> for GregorianDate {
    type Error = CalendarError;

    fn try_from(f: GregorianFields) -> Result<Self, Self::Error> {
        Self::new(f.gy, f.gm, f.gd)
    }
}
