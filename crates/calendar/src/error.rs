//! Error types for the jalaali-calendar crate.

/// Error type for all fallible operations in the jalaali-calendar crate.
///
/// The conversion engine has a single failure mode, a Jalaali year outside
/// the break-point table. Month and day variants come from the checked
/// constructors of the plain date values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a Jalaali year is outside the range covered by the
    /// break-point table.
    #[error("invalid Jalaali year: {year} (must be -61..=3177)")]
    InvalidYear {
        /// The out-of-range Jalaali year.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year() {
        let err = CalendarError::InvalidYear { year: 3178 };
        assert_eq!(
            err.to_string(),
            "invalid Jalaali year: 3178 (must be -61..=3177)"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 12,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 12 (max 29)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidYear { year: -62 };
        let b = CalendarError::InvalidYear { year: -62 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidYear { year: 3178 };
        assert_ne!(a, c);
    }
}
