//! Error types for the jalaali-datetime crate.

use jalaali_calendar::CalendarError;

/// Error type for all fallible operations in the jalaali-datetime crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// Wraps a range or validation error from the conversion engine.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when a combined `set` mixes Jalaali and Gregorian fields.
    #[error("ambiguous calendar: Jalaali and Gregorian fields cannot be set together")]
    AmbiguousCalendar,

    /// Returned when a mutation would move the timestamp outside the days
    /// the Jalaali converters accept.
    #[error("day {jdn} (JDN) is outside the supported Jalaali range")]
    OutOfRange {
        /// Julian Day Number of the rejected day.
        jdn: i64,
    },

    /// Returned when a time-of-day field is out of range.
    #[error("invalid {field}: {value}")]
    InvalidTime {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// Returned when a `[` in a pattern has no closing `]`.
    #[error("unterminated literal in pattern {pattern:?}")]
    UnterminatedLiteral {
        /// The pattern being compiled.
        pattern: String,
    },

    /// Returned when the compiled pattern cannot be turned into a regex.
    #[error("cannot build matcher for pattern {pattern:?}: {reason}")]
    Matcher {
        /// The pattern being compiled.
        pattern: String,
        /// Description of the regex failure.
        reason: String,
    },

    /// Returned when parsed input does not have the shape of the pattern.
    #[error("input {input:?} does not match pattern {pattern:?}")]
    PatternMismatch {
        /// The text being parsed.
        input: String,
        /// The pattern it was parsed against.
        pattern: String,
    },

    /// Returned when a pattern used for parsing lacks a required date token.
    #[error("pattern {pattern:?} has no {field} token")]
    MissingField {
        /// The missing field (`year`, `month` or `day`).
        field: &'static str,
        /// The pattern used for parsing.
        pattern: String,
    },

    /// Returned when a captured group is not a usable number.
    #[error("invalid number {value:?} for token {token}")]
    InvalidNumber {
        /// The token the group belongs to.
        token: &'static str,
        /// The captured text.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_error_is_transparent() {
        let err = DateTimeError::from(CalendarError::InvalidYear { year: 3178 });
        assert_eq!(
            err.to_string(),
            "invalid Jalaali year: 3178 (must be -61..=3177)"
        );
    }

    #[test]
    fn error_ambiguous() {
        assert_eq!(
            DateTimeError::AmbiguousCalendar.to_string(),
            "ambiguous calendar: Jalaali and Gregorian fields cannot be set together"
        );
    }

    #[test]
    fn error_invalid_time() {
        let err = DateTimeError::InvalidTime {
            field: "hour",
            value: 24,
        };
        assert_eq!(err.to_string(), "invalid hour: 24");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DateTimeError>();
    }
}
