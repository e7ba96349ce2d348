//! Pure conversion functions: command-line strings -> crate API types.

use anyhow::{Context, Result, bail};

use jalaali_calendar::{GregorianDate, JalaaliDate};
use jalaali_datetime::Unit;

/// Parses a unit name into the corresponding enum variant.
pub fn parse_unit(s: &str) -> Result<Unit> {
    match s.to_lowercase().as_str() {
        "d" | "day" | "days" => Ok(Unit::Day),
        "w" | "week" | "weeks" => Ok(Unit::Week),
        "m" | "month" | "months" => Ok(Unit::Month),
        "y" | "year" | "years" => Ok(Unit::Year),
        other => bail!("unknown unit: {other:?}"),
    }
}

/// Parses a Jalaali date written as `YYYY/MM/DD`.
pub fn parse_jalaali_date(s: &str) -> Result<JalaaliDate> {
    let (jy, jm, jd) = split_ymd(s, '/')?;
    JalaaliDate::new(jy, jm, jd).with_context(|| format!("invalid Jalaali date: {s:?}"))
}

/// Parses a Gregorian date written as `YYYY-MM-DD`.
pub fn parse_gregorian_date(s: &str) -> Result<GregorianDate> {
    let (gy, gm, gd) = split_ymd(s, '-')?;
    GregorianDate::new(gy, gm, gd).with_context(|| format!("invalid Gregorian date: {s:?}"))
}

/// Splits `year<sep>month<sep>day`. A leading `-` on the year is kept.
fn split_ymd(s: &str, sep: char) -> Result<(i32, u8, u8)> {
    let (sign, body) = match s.trim().strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.trim()),
    };
    let parts: Vec<&str> = body.split(sep).collect();
    let [y, m, d] = parts.as_slice() else {
        bail!("expected year{sep}month{sep}day, got {s:?}");
    };
    let year: i32 = y.parse().with_context(|| format!("invalid year: {y:?}"))?;
    let month: u8 = m.parse().with_context(|| format!("invalid month: {m:?}"))?;
    let day: u8 = d.parse().with_context(|| format!("invalid day: {d:?}"))?;
    Ok((sign * year, month, day))
}
