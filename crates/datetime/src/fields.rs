//! Field sets for the combined `set` and units for `add`.

/// Fields for [`JalaaliDateTime::set`](crate::JalaaliDateTime::set).
///
/// Every field is optional so that "absent" and an explicit zero are told
/// apart. Jalaali and Gregorian date fields are mutually exclusive within
/// one call; time-of-day fields combine with either.
///
/// # Example
///
/// ```
/// use jalaali_datetime::DateFields;
///
/// let fields = DateFields::new().with_jalaali_month(7).with_hour(0);
/// assert!(fields.has_jalaali());
/// assert!(!fields.has_gregorian());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFields {
    pub(crate) jalaali_year: Option<i32>,
    pub(crate) jalaali_month: Option<u8>,
    pub(crate) jalaali_day: Option<u8>,
    pub(crate) year: Option<i32>,
    pub(crate) month: Option<u8>,
    pub(crate) day: Option<u8>,
    pub(crate) hour: Option<u32>,
    pub(crate) minute: Option<u32>,
    pub(crate) second: Option<u32>,
    pub(crate) millisecond: Option<u32>,
}

impl DateFields {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Jalaali year.
    pub fn with_jalaali_year(mut self, year: i32) -> Self {
        self.jalaali_year = Some(year);
        self
    }

    /// Sets the Jalaali month.
    pub fn with_jalaali_month(mut self, month: u8) -> Self {
        self.jalaali_month = Some(month);
        self
    }

    /// Sets the Jalaali day.
    pub fn with_jalaali_day(mut self, day: u8) -> Self {
        self.jalaali_day = Some(day);
        self
    }

    /// Sets the Gregorian year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the Gregorian month.
    pub fn with_month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    /// Sets the Gregorian day.
    pub fn with_day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    /// Sets the hour (0..=23).
    pub fn with_hour(mut self, hour: u32) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Sets the minute (0..=59).
    pub fn with_minute(mut self, minute: u32) -> Self {
        self.minute = Some(minute);
        self
    }

    /// Sets the second (0..=59).
    pub fn with_second(mut self, second: u32) -> Self {
        self.second = Some(second);
        self
    }

    /// Sets the millisecond (0..=999).
    pub fn with_millisecond(mut self, millisecond: u32) -> Self {
        self.millisecond = Some(millisecond);
        self
    }

    /// Returns `true` if any Jalaali date field is present.
    pub fn has_jalaali(&self) -> bool {
        self.jalaali_year.is_some() || self.jalaali_month.is_some() || self.jalaali_day.is_some()
    }

    /// Returns `true` if any Gregorian date field is present.
    pub fn has_gregorian(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    /// Returns `true` if any time-of-day field is present.
    pub fn has_time(&self) -> bool {
        self.hour.is_some()
            || self.minute.is_some()
            || self.second.is_some()
            || self.millisecond.is_some()
    }
}

/// Unit for [`JalaaliDateTime::add`](crate::JalaaliDateTime::add).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Calendar days, applied to the Gregorian timestamp.
    Day,
    /// Seven days.
    Week,
    /// Jalaali months, with the day clamped to the target month.
    Month,
    /// Jalaali years, with the day clamped to the target month.
    Year,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_nothing() {
        let f = DateFields::new();
        assert!(!f.has_jalaali());
        assert!(!f.has_gregorian());
        assert!(!f.has_time());
    }

    #[test]
    fn explicit_zero_is_present() {
        let f = DateFields::new().with_hour(0);
        assert!(f.has_time());
        assert_eq!(f.hour, Some(0));
        assert_eq!(f.minute, None);
    }

    #[test]
    fn builders_set_fields() {
        let f = DateFields::new()
            .with_year(2023)
            .with_month(10)
            .with_day(27)
            .with_millisecond(5);
        assert!(f.has_gregorian());
        assert!(!f.has_jalaali());
        assert_eq!((f.year, f.month, f.day), (Some(2023), Some(10), Some(27)));
        assert_eq!(f.millisecond, Some(5));
    }
}
