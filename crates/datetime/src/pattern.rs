//! Numeric token patterns for formatting and parsing.
//!
//! | Token | Field | Parsed as |
//! |-------|-------|-----------|
//! | `YYYY` | Jalaali year, at least 4 digits | `-?\d{1,4}` |
//! | `YY` | last two digits of the year | `\d{2}` |
//! | `MM` / `M` | month, padded / bare | `\d{2}` / `\d{1,2}` |
//! | `DD` / `D` | day, padded / bare | `\d{2}` / `\d{1,2}` |
//! | `HH` / `H` | hour | `\d{2}` / `\d{1,2}` |
//! | `mm` / `m` | minute | `\d{2}` / `\d{1,2}` |
//! | `ss` / `s` | second | `\d{2}` / `\d{1,2}` |
//! | `SSS` | millisecond | `\d{3}` |
//! | `d` | weekday, 0 = Saturday | `[0-6]` |
//!
//! Text inside `[...]` and any other character is copied literally.

use std::fmt::Write;

use regex::Regex;
use tracing::debug;

use crate::datetime::JalaaliDateTime;
use crate::error::DateTimeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    ShortYear,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Weekday,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field {
        field: Field,
        padded: bool,
        name: &'static str,
    },
    Literal(String),
}

/// Recognised tokens, longest first so `YYYY` wins over `YY`.
const TOKENS: &[(&str, Field, bool)] = &[
    ("YYYY", Field::Year, true),
    ("SSS", Field::Millisecond, true),
    ("YY", Field::ShortYear, true),
    ("MM", Field::Month, true),
    ("DD", Field::Day, true),
    ("HH", Field::Hour, true),
    ("mm", Field::Minute, true),
    ("ss", Field::Second, true),
    ("M", Field::Month, false),
    ("D", Field::Day, false),
    ("H", Field::Hour, false),
    ("m", Field::Minute, false),
    ("s", Field::Second, false),
    ("d", Field::Weekday, false),
];

/// A compiled format pattern.
///
/// Compilation tokenizes the pattern once and builds an anchored regex with
/// one capture group per token, in order. Reuse a `Pattern` (or a
/// [`PatternCache`](crate::PatternCache)) to avoid recompiling.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
    matcher: Regex,
}

impl Pattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::UnterminatedLiteral`] if a `[` is never
    /// closed.
    pub fn compile(pattern: &str) -> Result<Self, DateTimeError> {
        let tokens = tokenize(pattern)?;
        let mut re = String::from("^");
        for token in &tokens {
            match token {
                Token::Literal(text) => re.push_str(&regex::escape(text)),
                Token::Field { field, padded, .. } => re.push_str(group(*field, *padded)),
            }
        }
        re.push('$');
        let matcher = Regex::new(&re).map_err(|e| DateTimeError::Matcher {
            pattern: pattern.to_owned(),
            reason: e.to_string(),
        })?;
        debug!(pattern, n_tokens = tokens.len(), "compiled pattern");
        Ok(Self {
            source: pattern.to_owned(),
            tokens,
            matcher,
        })
    }

    /// Returns the pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Renders a date-time.
    pub fn format(&self, date: &JalaaliDateTime) -> String {
        let j = date.jalaali();
        let mut out = String::with_capacity(self.source.len() + 8);
        for token in &self.tokens {
            let (field, padded) = match token {
                Token::Literal(text) => {
                    out.push_str(text);
                    continue;
                }
                Token::Field { field, padded, .. } => (*field, *padded),
            };
            let value: i64 = match field {
                Field::Year => i64::from(j.year()),
                Field::ShortYear => i64::from(j.year()).rem_euclid(100),
                Field::Month => i64::from(j.month()),
                Field::Day => i64::from(j.day()),
                Field::Hour => i64::from(date.hour()),
                Field::Minute => i64::from(date.minute()),
                Field::Second => i64::from(date.second()),
                Field::Millisecond => i64::from(date.millisecond()),
                Field::Weekday => i64::from((date.weekday().num_days_from_sunday() + 1) % 7),
            };
            let width = match (field, padded) {
                (_, false) => 0,
                (Field::Year, _) => 4,
                (Field::Millisecond, _) => 3,
                _ => 2,
            };
            // Writing to a String cannot fail.
            let _ = write!(out, "{value:0width$}");
        }
        out
    }

    /// Parses `input` into a date-time.
    ///
    /// Groups are read positionally; a repeated token keeps its last value.
    /// Missing time tokens default to midnight. A two-digit year below 50
    /// lands in the 1400s, otherwise in the 1300s. The weekday token is
    /// matched but not checked against the date.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::PatternMismatch`] if the input does not fit
    /// the pattern, [`DateTimeError::MissingField`] if the pattern has no
    /// year, month or day token, and the constructor's errors for fields
    /// that do not form a valid date.
    pub fn parse(&self, input: &str) -> Result<JalaaliDateTime, DateTimeError> {
        let caps = self
            .matcher
            .captures(input)
            .ok_or_else(|| DateTimeError::PatternMismatch {
                input: input.to_owned(),
                pattern: self.source.clone(),
            })?;

        let mut year: Option<i32> = None;
        let mut month: Option<u8> = None;
        let mut day: Option<u8> = None;
        let (mut hour, mut minute, mut second, mut milli) = (0u32, 0u32, 0u32, 0u32);

        let fields = self.tokens.iter().filter_map(|t| match t {
            Token::Field { field, name, .. } => Some((*field, *name)),
            Token::Literal(_) => None,
        });
        for (i, (field, name)) in fields.enumerate() {
            let Some(m) = caps.get(i + 1) else {
                continue;
            };
            let text = m.as_str();
            let invalid = || DateTimeError::InvalidNumber {
                token: name,
                value: text.to_owned(),
            };
            match field {
                Field::Year => year = Some(text.parse().map_err(|_| invalid())?),
                Field::ShortYear => {
                    let yy: i32 = text.parse().map_err(|_| invalid())?;
                    year = Some(if yy < 50 { 1400 + yy } else { 1300 + yy });
                }
                Field::Month => month = Some(text.parse().map_err(|_| invalid())?),
                Field::Day => day = Some(text.parse().map_err(|_| invalid())?),
                Field::Hour => hour = text.parse().map_err(|_| invalid())?,
                Field::Minute => minute = text.parse().map_err(|_| invalid())?,
                Field::Second => second = text.parse().map_err(|_| invalid())?,
                Field::Millisecond => milli = text.parse().map_err(|_| invalid())?,
                Field::Weekday => {}
            }
        }

        let missing = |field: &'static str| DateTimeError::MissingField {
            field,
            pattern: self.source.clone(),
        };
        let year = year.ok_or_else(|| missing("year"))?;
        let month = month.ok_or_else(|| missing("month"))?;
        let day = day.ok_or_else(|| missing("day"))?;
        JalaaliDateTime::from_jalaali_hms(year, month, day, hour, minute, second, milli)
    }
}

fn group(field: Field, padded: bool) -> &'static str {
    match (field, padded) {
        (Field::Year, _) => r"(-?\d{1,4})",
        (Field::ShortYear, _) => r"(\d{2})",
        (Field::Millisecond, _) => r"(\d{3})",
        (Field::Weekday, _) => r"([0-6])",
        (_, true) => r"(\d{2})",
        (_, false) => r"(\d{1,2})",
    }
}

fn tokenize(pattern: &str) -> Result<Vec<Token>, DateTimeError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '[' {
            let Some(end) = rest.find(']') else {
                return Err(DateTimeError::UnterminatedLiteral {
                    pattern: pattern.to_owned(),
                });
            };
            literal.push_str(&rest[1..end]);
            rest = &rest[end + 1..];
            continue;
        }
        for &(name, field, padded) in TOKENS {
            if let Some(tail) = rest.strip_prefix(name) {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Field {
                    field,
                    padded,
                    name,
                });
                rest = tail;
                continue 'outer;
            }
        }
        literal.push(c);
        rest = &rest[c.len_utf8()..];
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_longest_first() {
        let tokens = tokenize("YYYY/M/DD").unwrap();
        assert_eq!(tokens.len(), 5);
        assert!(matches!(
            tokens[0],
            Token::Field {
                field: Field::Year,
                ..
            }
        ));
        assert_eq!(tokens[1], Token::Literal("/".into()));
        assert!(matches!(
            tokens[2],
            Token::Field {
                field: Field::Month,
                padded: false,
                ..
            }
        ));
    }

    #[test]
    fn bracketed_text_is_literal() {
        let tokens = tokenize("[Day] D").unwrap();
        assert_eq!(tokens[0], Token::Literal("Day ".into()));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn unterminated_bracket() {
        assert_eq!(
            tokenize("YYYY [at").unwrap_err(),
            DateTimeError::UnterminatedLiteral {
                pattern: "YYYY [at".into()
            }
        );
    }

    #[test]
    fn regex_escapes_literals() {
        let p = Pattern::compile("YYYY.MM.DD").unwrap();
        assert!(p.matcher.is_match("1402.08.05"));
        assert!(!p.matcher.is_match("1402x08x05"));
    }

    #[test]
    fn non_ascii_literals() {
        let p = Pattern::compile("YYYY،MM").unwrap();
        assert_eq!(p.tokens[1], Token::Literal("،".into()));
    }
}
