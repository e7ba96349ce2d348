//! Calendar commands: conversion, leap years, month lengths and weeks.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use jalaali_calendar::{
    GregorianDate, JalaaliDate, jal_cal, jalaali_month_length, jalaali_week,
};

use crate::cli::{GregorianArgs, JalaaliArgs, MonthArgs, YearArgs};
use crate::config::JalaaliConfig;
use crate::convert;
use crate::output;

#[derive(Serialize)]
struct Conversion {
    jalaali: JalaaliDate,
    gregorian: GregorianDate,
    weekday: String,
}

/// Convert a Gregorian date to Jalaali.
pub fn to_jalaali(args: GregorianArgs, config: &JalaaliConfig) -> Result<()> {
    let _cmd = info_span!("to_jalaali").entered();
    let gregorian = convert::parse_gregorian_date(&args.date)?;
    let jalaali = gregorian
        .to_jalaali()
        .with_context(|| format!("{gregorian} has no supported Jalaali equivalent"))?;
    info!(%gregorian, %jalaali, "converted");
    let result = Conversion {
        jalaali,
        gregorian,
        weekday: jalaali.weekday().to_string(),
    };
    output::emit(config, &result, jalaali)
}

/// Convert a Jalaali date to Gregorian.
pub fn to_gregorian(args: JalaaliArgs, config: &JalaaliConfig) -> Result<()> {
    let _cmd = info_span!("to_gregorian").entered();
    let jalaali = convert::parse_jalaali_date(&args.date)?;
    let gregorian = jalaali.to_gregorian();
    info!(%jalaali, %gregorian, "converted");
    let result = Conversion {
        jalaali,
        gregorian,
        weekday: gregorian.weekday().to_string(),
    };
    output::emit(config, &result, gregorian)
}

#[derive(Serialize)]
struct Leap {
    year: i32,
    leap: bool,
    years_since_leap: u8,
    gregorian_year: i32,
    march: i32,
}

/// Report whether a Jalaali year is leap, with the Gregorian day of 1 Farvardin.
pub fn leap(args: YearArgs, config: &JalaaliConfig) -> Result<()> {
    let _cmd = info_span!("leap", year = args.year).entered();
    let row = jal_cal(args.year, false)?;
    let result = Leap {
        year: args.year,
        leap: row.leap == 0,
        years_since_leap: row.leap,
        gregorian_year: row.gy,
        march: row.march,
    };
    let text = format!(
        "{} (1 Farvardin = {:04}-03-{:02})",
        result.leap, row.gy, row.march
    );
    output::emit(config, &result, text)
}

#[derive(Serialize)]
struct MonthLength {
    year: i32,
    month: u8,
    days: u8,
}

/// Number of days in a Jalaali month.
pub fn month_length(args: MonthArgs, config: &JalaaliConfig) -> Result<()> {
    let _cmd = info_span!("month_length", year = args.year, month = args.month).entered();
    let days = jalaali_month_length(args.year, args.month)?;
    let result = MonthLength {
        year: args.year,
        month: args.month,
        days,
    };
    output::emit(config, &result, days)
}

/// Saturday and Friday of the week containing a Jalaali date.
pub fn week(args: JalaaliArgs, config: &JalaaliConfig) -> Result<()> {
    let _cmd = info_span!("week").entered();
    let date = convert::parse_jalaali_date(&args.date)?;
    let (jy, jm, jd) = date.ymd();
    let week = jalaali_week(jy, jm, jd)?;
    info!(%date, saturday = %week.saturday, friday = %week.friday, "week resolved");
    output::emit(config, &week, format!("{} {}", week.saturday, week.friday))
}
