//! Date-time commands: pattern formatting and calendar arithmetic.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use jalaali_calendar::{GregorianDate, JalaaliDate};
use jalaali_datetime::{JalaaliDateTime, Pattern};

use crate::cli::{AddArgs, FormatArgs};
use crate::config::JalaaliConfig;
use crate::convert;
use crate::output;

#[derive(Serialize)]
struct Rendered {
    jalaali: JalaaliDate,
    gregorian: GregorianDate,
    formatted: String,
}

fn load(date: &str) -> Result<JalaaliDateTime> {
    let date = convert::parse_jalaali_date(date)?;
    let (jy, jm, jd) = date.ymd();
    JalaaliDateTime::from_jalaali(jy, jm, jd).with_context(|| format!("unsupported date: {date}"))
}

fn render(date: &JalaaliDateTime, pattern: &Pattern, config: &JalaaliConfig) -> Result<()> {
    let formatted = pattern.format(date);
    let result = Rendered {
        jalaali: date.jalaali(),
        gregorian: date.gregorian(),
        formatted: formatted.clone(),
    };
    output::emit(config, &result, formatted)
}

/// Format a Jalaali date with a token pattern.
pub fn format(args: FormatArgs, config: &JalaaliConfig) -> Result<()> {
    let _cmd = info_span!("format").entered();
    let source = args.pattern.as_deref().unwrap_or(&config.output.pattern);
    let pattern =
        Pattern::compile(source).with_context(|| format!("invalid pattern: {source:?}"))?;
    let date = load(&args.date)?;
    debug!(%date, pattern = pattern.as_str(), "formatting");
    render(&date, &pattern, config)
}

/// Shift a Jalaali date by days, weeks, months or years.
pub fn add(args: AddArgs, config: &JalaaliConfig) -> Result<()> {
    let _cmd = info_span!("add", amount = args.amount, unit = %args.unit).entered();
    let unit = convert::parse_unit(&args.unit)?;
    let pattern = Pattern::compile(&config.output.pattern)
        .with_context(|| format!("invalid pattern: {:?}", config.output.pattern))?;
    let mut date = load(&args.date)?;
    let before = date.jalaali();
    date.add(args.amount, unit)
        .with_context(|| format!("cannot add {} {:?} to {before}", args.amount, unit))?;
    info!(%before, after = %date.jalaali(), "shifted");
    render(&date, &pattern, config)
}
