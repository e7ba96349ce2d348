//! Text or JSON output for command results.

use std::fmt::Display;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::JalaaliConfig;

/// Prints `value` as one line of JSON when JSON output is enabled, otherwise
/// prints `text`.
pub fn emit<T: Serialize>(config: &JalaaliConfig, value: &T, text: impl Display) -> Result<()> {
    if config.output.json {
        let json = serde_json::to_string(value).context("failed to serialize result")?;
        println!("{json}");
    } else {
        println!("{text}");
    }
    Ok(())
}
