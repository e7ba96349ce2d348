//! # jalaali-calendar
//!
//! Pure date arithmetic between the Jalaali (Persian solar Hijri) and the
//! proleptic Gregorian calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GregorianDate"] -->|"g2d()"| J["JDN (i64)"]
//!     J -->|"d2g()"| A
//!     B["JalaaliDate"] -->|"j2d()"| J
//!     J -->|"d2j()"| B
//!     C["BREAKS"] -->|"jal_cal()"| D["CalCalc"]
//!     D --> B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use jalaali_calendar::{is_leap_jalaali_year, jalaali_month_length, to_gregorian, to_jalaali};
//!
//! let j = to_jalaali(2021, 3, 21).unwrap();
//! assert_eq!(j.ymd(), (1400, 1, 1));
//!
//! let g = to_gregorian(1402, 8, 5).unwrap();
//! assert_eq!(g.ymd(), (2023, 10, 27));
//!
//! assert!(is_leap_jalaali_year(1403).unwrap());
//! assert_eq!(jalaali_month_length(1402, 12).unwrap(), 29);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `arith` | Truncating division and remainder |
//! | `breaks` | Break-point table and the `jal_cal` leap engine |
//! | `jdn` | Gregorian ⇄ Julian Day Number bridge |
//! | `convert` | Jalaali ⇄ JDN and the public converters |
//! | `date` | `JalaaliDate`, `GregorianDate`, `JalaaliWeek` values |
//! | `error` | Error types |

mod arith;
mod breaks;
mod convert;
mod date;
mod error;
mod jdn;

pub use arith::{div, modulo};
pub use breaks::{BREAKS, CalCalc, MAX_YEAR, MIN_YEAR, jal_cal};
pub use convert::{
    d2j, is_leap_jalaali_year, is_valid_jalaali_date, j2d, jalaali_month_length, jalaali_week,
    supported_jdn_range, to_gregorian, to_jalaali,
};
pub use date::{GregorianDate, JalaaliDate, JalaaliWeek};
pub use error::CalendarError;
pub use jdn::{GREGORIAN_JDN_RANGE, d2g, g2d, weekday};
