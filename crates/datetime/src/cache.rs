//! Explicit cache of compiled patterns.

use std::collections::HashMap;

use tracing::trace;

use crate::datetime::JalaaliDateTime;
use crate::error::DateTimeError;
use crate::pattern::Pattern;

/// Append-only map from pattern text to its compiled [`Pattern`].
///
/// Entries are never evicted or invalidated; a compiled pattern does not
/// depend on any date. Own one per formatting context and pass it where
/// patterns are reused.
///
/// # Example
///
/// ```
/// use jalaali_datetime::{JalaaliDateTime, PatternCache};
///
/// let mut cache = PatternCache::new();
/// let date = JalaaliDateTime::from_jalaali(1402, 8, 5).unwrap();
/// assert_eq!(cache.format(&date, "YYYY/MM/DD").unwrap(), "1402/08/05");
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternCache {
    patterns: HashMap<String, Pattern>,
}

impl PatternCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled pattern, compiling and storing it on first use.
    ///
    /// # Errors
    ///
    /// Returns the compilation error of [`Pattern::compile`]; nothing is
    /// stored in that case.
    pub fn get_or_compile(&mut self, pattern: &str) -> Result<&Pattern, DateTimeError> {
        if !self.patterns.contains_key(pattern) {
            let compiled = Pattern::compile(pattern)?;
            self.patterns.insert(pattern.to_owned(), compiled);
        } else {
            trace!(pattern, "pattern cache hit");
        }
        Ok(&self.patterns[pattern])
    }

    /// Formats `date` with a cached pattern.
    ///
    /// # Errors
    ///
    /// See [`get_or_compile`](Self::get_or_compile).
    pub fn format(&mut self, date: &JalaaliDateTime, pattern: &str) -> Result<String, DateTimeError> {
        Ok(self.get_or_compile(pattern)?.format(date))
    }

    /// Parses `input` with a cached pattern.
    ///
    /// # Errors
    ///
    /// See [`get_or_compile`](Self::get_or_compile) and [`Pattern::parse`].
    pub fn parse(&mut self, input: &str, pattern: &str) -> Result<JalaaliDateTime, DateTimeError> {
        self.get_or_compile(pattern)?.parse(input)
    }

    /// Number of compiled patterns held.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if nothing has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
