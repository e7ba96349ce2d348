mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod date_cmd;
mod logging;
mod output;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::JalaaliConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = JalaaliConfig::load(cli.config.as_deref())?;
    if cli.json {
        config.output.json = true;
    }
    match cli.command {
        Command::ToJalaali(args) => calendar_cmd::to_jalaali(args, &config),
        Command::ToGregorian(args) => calendar_cmd::to_gregorian(args, &config),
        Command::Leap(args) => calendar_cmd::leap(args, &config),
        Command::MonthLength(args) => calendar_cmd::month_length(args, &config),
        Command::Week(args) => calendar_cmd::week(args, &config),
        Command::Format(args) => date_cmd::format(args, &config),
        Command::Add(args) => date_cmd::add(args, &config),
    }
}
