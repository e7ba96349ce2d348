//! # jalaali-datetime
//!
//! A mutable civil date-time that stores one Gregorian timestamp and keeps
//! its Jalaali fields synchronized through a lazily filled cache.
//!
//! ## Architecture
//!
//! ```text
//! JalaaliDateTime
//!   ├─ timestamp: NaiveDateTime        (canonical, Gregorian)
//!   ├─ cache: Cell<Option<JalaaliDate>>
//!   │    ├─ filled by reads via to_jalaali()
//!   │    ├─ seeded by Jalaali setters with the applied target
//!   │    └─ cleared by native mutators
//!   ├─ set(DateFields) / add(amount, Unit)
//!   └─ format() / parse()  ──> Pattern ──> PatternCache
//! ```
//!
//! ## Quick start
//!
//! ```
//! use jalaali_datetime::{DateFields, JalaaliDateTime, Unit};
//!
//! let mut date = JalaaliDateTime::from_jalaali(1402, 12, 29).unwrap();
//! date.add(1, Unit::Day).unwrap();
//! assert_eq!(date.jalaali().ymd(), (1403, 1, 1));
//!
//! date.set(DateFields::new().with_jalaali_month(7).with_hour(9)).unwrap();
//! assert_eq!(date.format("YYYY/MM/DD HH:mm").unwrap(), "1403/07/01 09:00");
//! ```

mod cache;
mod datetime;
mod error;
mod fields;
mod pattern;

pub use cache::PatternCache;
pub use datetime::JalaaliDateTime;
pub use error::DateTimeError;
pub use fields::{DateFields, Unit};
pub use pattern::Pattern;
