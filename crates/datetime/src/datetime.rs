//! Mutable date-time that keeps Jalaali fields in step with a Gregorian
//! timestamp.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use jalaali_calendar::{
    CalendarError, GregorianDate, JalaaliDate, g2d, jalaali_month_length, supported_jdn_range,
    to_jalaali,
};
use tracing::trace;

use crate::error::DateTimeError;
use crate::fields::{DateFields, Unit};
use crate::pattern::Pattern;

/// A civil date-time addressed in both the Jalaali and Gregorian calendars.
///
/// The Gregorian [`NaiveDateTime`] is the only stored truth. Jalaali fields
/// are converted from it on first read and cached until the next mutation.
/// Jalaali setters write the exact target they applied into the cache;
/// every other mutator clears it.
///
/// The cache lives in a [`Cell`], so the type is `Send` but not `Sync`.
/// Wrap it in a `Mutex` to share it between threads.
///
/// # Example
///
/// ```
/// use jalaali_datetime::{JalaaliDateTime, Unit};
///
/// let mut date = JalaaliDateTime::from_jalaali(1402, 6, 31).unwrap();
/// date.add(1, Unit::Month).unwrap();
/// assert_eq!(date.jalaali().ymd(), (1402, 7, 30));
/// ```
#[derive(Debug, Clone)]
pub struct JalaaliDateTime {
    timestamp: NaiveDateTime,
    cache: Cell<Option<JalaaliDate>>,
}

impl JalaaliDateTime {
    /// Creates a date-time from a Gregorian timestamp. The cache starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::OutOfRange`] if the day cannot be expressed
    /// in the Jalaali calendar.
    pub fn from_gregorian(timestamp: NaiveDateTime) -> Result<Self, DateTimeError> {
        check_range(jdn_of(timestamp.date()))?;
        Ok(Self {
            timestamp,
            cache: Cell::new(None),
        })
    }

    /// Creates a date-time at midnight of a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Calendar`] for a non-existent date and
    /// [`DateTimeError::OutOfRange`] outside the Jalaali range.
    pub fn from_gregorian_ymd(gy: i32, gm: u8, gd: u8) -> Result<Self, DateTimeError> {
        let date = GregorianDate::new(gy, gm, gd)?;
        let jdn = date.to_jdn();
        Self::from_gregorian(naive_date(jdn)?.and_time(NaiveTime::MIN))
    }

    /// Creates a date-time at midnight of a Jalaali date.
    ///
    /// The cache is seeded with the given fields, so no conversion back from
    /// the timestamp is needed.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Calendar`] for a non-existent date and
    /// [`DateTimeError::OutOfRange`] for the last days of the final
    /// supported year.
    pub fn from_jalaali(jy: i32, jm: u8, jd: u8) -> Result<Self, DateTimeError> {
        Self::from_jalaali_hms(jy, jm, jd, 0, 0, 0, 0)
    }

    /// Creates a date-time from Jalaali fields and a time of day.
    ///
    /// # Errors
    ///
    /// As [`from_jalaali`](Self::from_jalaali), plus
    /// [`DateTimeError::InvalidTime`] for an out-of-range time field.
    pub fn from_jalaali_hms(
        jy: i32,
        jm: u8,
        jd: u8,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, DateTimeError> {
        let target = JalaaliDate::new(jy, jm, jd)?;
        let time = time_of_day(hour, minute, second, millisecond)?;
        let date = naive_date(check_range(target.to_jdn())?)?;
        Ok(Self {
            timestamp: date.and_time(time),
            cache: Cell::new(Some(target)),
        })
    }

    /// Parses `input` against a numeric token pattern.
    ///
    /// # Errors
    ///
    /// See [`Pattern::parse`].
    pub fn parse(input: &str, pattern: &str) -> Result<Self, DateTimeError> {
        Pattern::compile(pattern)?.parse(input)
    }

    /// Formats this date-time with a numeric token pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::UnterminatedLiteral`] for a malformed pattern.
    pub fn format(&self, pattern: &str) -> Result<String, DateTimeError> {
        Ok(Pattern::compile(pattern)?.format(self))
    }

    // ---- reads ----------------------------------------------------------

    /// Returns the Jalaali date, converting and caching it if needed.
    pub fn jalaali(&self) -> JalaaliDate {
        if let Some(date) = self.cache.get() {
            return date;
        }
        let g = self.timestamp.date();
        // Every constructor and mutator range-checks the timestamp.
        let date = to_jalaali(g.year(), g.month() as u8, g.day() as u8)
            .expect("timestamp is kept inside the supported Jalaali range");
        trace!(%date, "hydrated jalaali fields");
        self.cache.set(Some(date));
        date
    }

    /// Returns the Jalaali year.
    pub fn year(&self) -> i32 {
        self.jalaali().year()
    }

    /// Returns the Jalaali month (1..=12).
    pub fn month(&self) -> u8 {
        self.jalaali().month()
    }

    /// Returns the Jalaali day of the month.
    pub fn day(&self) -> u8 {
        self.jalaali().day()
    }

    /// Returns `true` if the Jalaali fields are currently cached.
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Returns the Gregorian timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the Gregorian date.
    pub fn gregorian(&self) -> GregorianDate {
        GregorianDate::from(self.timestamp.date())
    }

    /// Returns the hour.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Returns the minute.
    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    /// Returns the second.
    pub fn second(&self) -> u32 {
        self.timestamp.second()
    }

    /// Returns the millisecond.
    pub fn millisecond(&self) -> u32 {
        self.timestamp.nanosecond() / 1_000_000
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// Returns `true` if the Jalaali year is leap.
    pub fn is_leap_year(&self) -> bool {
        self.jalaali().is_leap_year()
    }

    /// Returns the number of days in the current Jalaali month.
    pub fn days_in_month(&self) -> u8 {
        self.jalaali().days_in_month()
    }

    // ---- Jalaali setters ------------------------------------------------

    /// Sets the Jalaali year, clamping the day to the target month.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Calendar`] for an unsupported year and
    /// [`DateTimeError::OutOfRange`] past the last supported day.
    pub fn set_year(&mut self, year: i32) -> Result<(), DateTimeError> {
        self.set(DateFields::new().with_jalaali_year(year))
    }

    /// Sets the Jalaali month, clamping the day to the target month.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Calendar`] for a month outside 1..=12.
    pub fn set_month(&mut self, month: u8) -> Result<(), DateTimeError> {
        self.set(DateFields::new().with_jalaali_month(month))
    }

    /// Sets the Jalaali day of the month.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Calendar`] if the day does not exist in the
    /// current month.
    pub fn set_day(&mut self, day: u8) -> Result<(), DateTimeError> {
        self.set(DateFields::new().with_jalaali_day(day))
    }

    /// Applies several fields at once.
    ///
    /// Jalaali date fields go through the converters and seed the cache with
    /// the applied target. Gregorian date fields behave like the native
    /// mutators and clear it. A day carried over from the current date is
    /// clamped to the target Jalaali month; an explicit day is validated.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::AmbiguousCalendar`] if both Jalaali and
    /// Gregorian date fields are present, and the errors of the individual
    /// setters otherwise. On error `self` is left unchanged.
    pub fn set(&mut self, fields: DateFields) -> Result<(), DateTimeError> {
        if fields.has_jalaali() && fields.has_gregorian() {
            return Err(DateTimeError::AmbiguousCalendar);
        }
        let time = if fields.has_time() {
            replace_time(self.timestamp.time(), &fields)?
        } else {
            self.timestamp.time()
        };

        if fields.has_jalaali() {
            let now = self.jalaali();
            let year = fields.jalaali_year.unwrap_or(now.year());
            let month = fields.jalaali_month.unwrap_or(now.month());
            let day = match fields.jalaali_day {
                Some(day) => day,
                None => now.day().min(jalaali_month_length(year, month)?),
            };
            let target = JalaaliDate::new(year, month, day)?;
            self.apply_jalaali(target, time)
        } else if fields.has_gregorian() {
            let now = self.timestamp.date();
            let jdn = rolled_jdn(
                fields.year.unwrap_or(now.year()),
                fields.month.unwrap_or(now.month() as u8),
                fields.day.unwrap_or(now.day() as u8),
            )?;
            self.apply_native(jdn, time)
        } else {
            self.apply_native(jdn_of(self.timestamp.date()), time)
        }
    }

    /// Shifts the date by `amount` units.
    ///
    /// Days and weeks move the Gregorian timestamp. Months and years move in
    /// Jalaali space: the year carry is applied first, then the month, and
    /// the day is clamped after each step. Esfand 30 plus one month into a
    /// non-leap year therefore lands on Farvardin 29.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::OutOfRange`] or [`DateTimeError::Calendar`]
    /// if the result leaves the supported range.
    pub fn add(&mut self, amount: i32, unit: Unit) -> Result<(), DateTimeError> {
        match unit {
            Unit::Day => self.add_days(i64::from(amount)),
            Unit::Week => self.add_days(i64::from(amount) * 7),
            Unit::Month | Unit::Year => {
                let now = self.jalaali();
                let months = match unit {
                    Unit::Month => i64::from(amount),
                    _ => i64::from(amount) * 12,
                };
                let total = i64::from(now.month()) - 1 + months;
                let year = clamp_year(i64::from(now.year()) + total.div_euclid(12));
                let month = (total.rem_euclid(12) + 1) as u8;
                let day = now
                    .day()
                    .min(jalaali_month_length(year, now.month())?)
                    .min(jalaali_month_length(year, month)?);
                let target = JalaaliDate::new(year, month, day)?;
                self.apply_jalaali(target, self.timestamp.time())
            }
        }
    }

    // ---- native mutators ------------------------------------------------

    /// Replaces the Gregorian timestamp. Clears the cache.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::OutOfRange`] outside the Jalaali range.
    pub fn set_timestamp(&mut self, timestamp: NaiveDateTime) -> Result<(), DateTimeError> {
        self.apply_native(jdn_of(timestamp.date()), timestamp.time())
    }

    /// Sets the Gregorian year. A day past the end of the month rolls over.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::OutOfRange`] outside the Jalaali range.
    pub fn set_gregorian_year(&mut self, year: i32) -> Result<(), DateTimeError> {
        self.set(DateFields::new().with_year(year))
    }

    /// Sets the Gregorian month. A day past the end of the month rolls over.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Calendar`] for a month outside 1..=12.
    pub fn set_gregorian_month(&mut self, month: u8) -> Result<(), DateTimeError> {
        self.set(DateFields::new().with_month(month))
    }

    /// Sets the Gregorian day. A day past the end of the month rolls over.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::Calendar`] for day 0.
    pub fn set_gregorian_day(&mut self, day: u8) -> Result<(), DateTimeError> {
        self.set(DateFields::new().with_day(day))
    }

    /// Sets the hour. Clears the cache.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidTime`] outside 0..=23.
    pub fn set_hour(&mut self, hour: u32) -> Result<(), DateTimeError> {
        self.set(DateFields::new().with_hour(hour))
    }

    /// Sets the minute. Clears the cache.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidTime`] outside 0..=59.
    pub fn set_minute(&mut self, minute: u32) -> Result<(), DateTimeError> {
        self.set(DateFields::new().with_minute(minute))
    }

    /// Sets the second. Clears the cache.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidTime`] outside 0..=59.
    pub fn set_second(&mut self, second: u32) -> Result<(), DateTimeError> {
        self.set(DateFields::new().with_second(second))
    }

    /// Sets the millisecond. Clears the cache.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidTime`] outside 0..=999.
    pub fn set_millisecond(&mut self, millisecond: u32) -> Result<(), DateTimeError> {
        self.set(DateFields::new().with_millisecond(millisecond))
    }

    /// Moves the timestamp by whole days. Clears the cache.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::OutOfRange`] outside the Jalaali range.
    pub fn add_days(&mut self, days: i64) -> Result<(), DateTimeError> {
        let jdn = jdn_of(self.timestamp.date()).saturating_add(days);
        self.apply_native(jdn, self.timestamp.time())
    }

    // ---- internals ------------------------------------------------------

    fn apply_jalaali(&mut self, target: JalaaliDate, time: NaiveTime) -> Result<(), DateTimeError> {
        let date = naive_date(check_range(target.to_jdn())?)?;
        self.timestamp = date.and_time(time);
        self.cache.set(Some(target));
        trace!(%target, "applied jalaali fields");
        Ok(())
    }

    fn apply_native(&mut self, jdn: i64, time: NaiveTime) -> Result<(), DateTimeError> {
        let date = naive_date(check_range(jdn)?)?;
        self.timestamp = date.and_time(time);
        self.cache.set(None);
        trace!(timestamp = %self.timestamp, "invalidated jalaali cache");
        Ok(())
    }
}

impl PartialEq for JalaaliDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp
    }
}

impl Eq for JalaaliDateTime {}

impl PartialOrd for JalaaliDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JalaaliDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

impl Hash for JalaaliDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.timestamp.hash(state);
    }
}

impl fmt::Display for JalaaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.jalaali(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

fn jdn_of(date: NaiveDate) -> i64 {
    GregorianDate::from(date).to_jdn()
}

fn check_range(jdn: i64) -> Result<i64, DateTimeError> {
    if supported_jdn_range().contains(&jdn) {
        Ok(jdn)
    } else {
        Err(DateTimeError::OutOfRange { jdn })
    }
}

fn naive_date(jdn: i64) -> Result<NaiveDate, DateTimeError> {
    GregorianDate::from_jdn(jdn)
        .to_naive_date()
        .ok_or(DateTimeError::OutOfRange { jdn })
}

/// JDN of a Gregorian date where days past the month end roll forward.
fn rolled_jdn(year: i32, month: u8, day: u8) -> Result<i64, DateTimeError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month }.into());
    }
    let first = g2d(year, i32::from(month), 1);
    if day == 0 {
        let max_day = (g2d(year, i32::from(month) + 1, 1) - first) as u8;
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day,
        }
        .into());
    }
    Ok(first + i64::from(day) - 1)
}

fn time_of_day(
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
) -> Result<NaiveTime, DateTimeError> {
    let checks = [
        ("hour", hour, 23),
        ("minute", minute, 59),
        ("second", second, 59),
        ("millisecond", millisecond, 999),
    ];
    for (field, value, max) in checks {
        if value > max {
            return Err(DateTimeError::InvalidTime { field, value });
        }
    }
    NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond).ok_or(
        DateTimeError::InvalidTime {
            field: "millisecond",
            value: millisecond,
        },
    )
}

/// Overwrites only the time fields present in `fields`, keeping the rest of
/// `current` (sub-millisecond nanoseconds and leap seconds included).
fn replace_time(current: NaiveTime, fields: &DateFields) -> Result<NaiveTime, DateTimeError> {
    let mut time = current;
    if let Some(hour) = fields.hour {
        time = time.with_hour(hour).ok_or(DateTimeError::InvalidTime {
            field: "hour",
            value: hour,
        })?;
    }
    if let Some(minute) = fields.minute {
        time = time.with_minute(minute).ok_or(DateTimeError::InvalidTime {
            field: "minute",
            value: minute,
        })?;
    }
    if let Some(second) = fields.second {
        time = time.with_second(second).ok_or(DateTimeError::InvalidTime {
            field: "second",
            value: second,
        })?;
    }
    if let Some(millisecond) = fields.millisecond {
        let invalid = DateTimeError::InvalidTime {
            field: "millisecond",
            value: millisecond,
        };
        if millisecond > 999 {
            return Err(invalid);
        }
        time = time.with_nanosecond(millisecond * 1_000_000).ok_or(invalid)?;
    }
    Ok(time)
}

fn clamp_year(year: i64) -> i32 {
    year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn from_gregorian_starts_uncached() {
        let date = JalaaliDateTime::from_gregorian(at(2023, 10, 27, 8, 30)).unwrap();
        assert!(!date.is_cached());
        assert_eq!(date.jalaali().ymd(), (1402, 8, 5));
        assert!(date.is_cached());
    }

    #[test]
    fn from_jalaali_seeds_cache() {
        let date = JalaaliDateTime::from_jalaali(1402, 8, 5).unwrap();
        assert!(date.is_cached());
        assert_eq!(date.gregorian().ymd(), (2023, 10, 27));
        assert_eq!((date.hour(), date.minute()), (0, 0));
    }

    #[test]
    fn time_fields_preserved_by_jalaali_setters() {
        let mut date = JalaaliDateTime::from_gregorian(at(2023, 10, 27, 13, 45)).unwrap();
        date.set_day(1).unwrap();
        assert_eq!(date.jalaali().ymd(), (1402, 8, 1));
        assert_eq!((date.hour(), date.minute()), (13, 45));
    }

    #[test]
    fn replace_time_touches_only_present_fields() {
        let current = NaiveTime::from_hms_nano_opt(8, 0, 0, 123_456_789).unwrap();
        let fields = DateFields::new().with_hour(9);
        let time = replace_time(current, &fields).unwrap();
        assert_eq!((time.hour(), time.minute()), (9, 0));
        assert_eq!(time.nanosecond(), 123_456_789);

        let time = replace_time(current, &DateFields::new().with_millisecond(5)).unwrap();
        assert_eq!(time.nanosecond(), 5_000_000);
        assert_eq!(
            replace_time(current, &DateFields::new().with_minute(60)).unwrap_err(),
            DateTimeError::InvalidTime {
                field: "minute",
                value: 60
            }
        );
    }

    #[test]
    fn invalid_time_rejected() {
        assert_eq!(
            JalaaliDateTime::from_jalaali_hms(1402, 1, 1, 24, 0, 0, 0).unwrap_err(),
            DateTimeError::InvalidTime {
                field: "hour",
                value: 24
            }
        );
        assert_eq!(
            time_of_day(0, 0, 0, 1000).unwrap_err(),
            DateTimeError::InvalidTime {
                field: "millisecond",
                value: 1000
            }
        );
    }

    #[test]
    fn rolled_jdn_overflows_forward() {
        assert_eq!(rolled_jdn(2023, 2, 31).unwrap(), g2d(2023, 3, 3));
        assert!(matches!(
            rolled_jdn(2023, 13, 1),
            Err(DateTimeError::Calendar(CalendarError::InvalidMonth { month: 13 }))
        ));
        assert!(matches!(
            rolled_jdn(2023, 4, 0),
            Err(DateTimeError::Calendar(CalendarError::InvalidDay { max_day: 30, .. }))
        ));
    }

    #[test]
    fn equality_ignores_cache_state() {
        let a = JalaaliDateTime::from_jalaali(1402, 8, 5).unwrap();
        let b = JalaaliDateTime::from_gregorian(at(2023, 10, 27, 0, 0)).unwrap();
        assert!(a.is_cached() && !b.is_cached());
        assert_eq!(a, b);
    }

    #[test]
    fn display() {
        let date = JalaaliDateTime::from_jalaali_hms(1402, 8, 5, 9, 5, 7, 0).unwrap();
        assert_eq!(date.to_string(), "1402/08/05 09:05:07");
    }

    #[test]
    fn is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<JalaaliDateTime>();
    }
}
