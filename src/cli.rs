use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Jalaali (Persian) and Gregorian calendar converter.
#[derive(Parser)]
#[command(
    name = "jalaali",
    version,
    about = "Convert dates between the Jalaali and Gregorian calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./jalaali.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date (YYYY-MM-DD) to Jalaali.
    ToJalaali(GregorianArgs),
    /// Convert a Jalaali date (YYYY/MM/DD) to Gregorian.
    ToGregorian(JalaaliArgs),
    /// Report whether a Jalaali year is leap.
    Leap(YearArgs),
    /// Number of days in a Jalaali month.
    MonthLength(MonthArgs),
    /// Saturday and Friday of the week containing a Jalaali date.
    Week(JalaaliArgs),
    /// Format a Jalaali date with a token pattern.
    Format(FormatArgs),
    /// Shift a Jalaali date by days, weeks, months or years.
    Add(AddArgs),
}

/// A single Gregorian date argument.
#[derive(clap::Args)]
pub struct GregorianArgs {
    /// Gregorian date, e.g. 2023-10-27.
    #[arg(allow_hyphen_values = true)]
    pub date: String,
}

/// A single Jalaali date argument.
#[derive(clap::Args)]
pub struct JalaaliArgs {
    /// Jalaali date, e.g. 1402/08/05.
    #[arg(allow_hyphen_values = true)]
    pub date: String,
}

/// Arguments for the `leap` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Jalaali year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

/// Arguments for the `month-length` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Jalaali year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Month number (1..=12).
    pub month: u8,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Jalaali date, e.g. 1402/08/05.
    #[arg(allow_hyphen_values = true)]
    pub date: String,

    /// Override the output pattern from config.
    #[arg(short, long)]
    pub pattern: Option<String>,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Jalaali date, e.g. 1402/08/05.
    #[arg(allow_hyphen_values = true)]
    pub date: String,

    /// Amount to add (negative to subtract).
    #[arg(allow_negative_numbers = true)]
    pub amount: i32,

    /// Unit: day, week, month or year.
    pub unit: String,
}
