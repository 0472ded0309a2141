//! `show`: load config and overrides and print the merged tree.

use crate::config::{LoadReport, Locator};
use crate::format::OutputFormat;
use anyhow::Result;
use clap::Args;
use serde_json::Value;
use std::io::Write;
use tracing::debug;

/// Arguments for the show command.
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Run the show command, writing the merged config to `out`.
pub fn run_show(locator: &Locator, args: &ShowArgs, out: &mut impl Write) -> Result<LoadReport> {
    let mut merged = Value::Null;
    let report = locator.load_into(&mut merged)?;

    debug!(
        primary = %report.primary.display(),
        overrides = ?report.overrides,
        "Loaded config"
    );

    out.write_all(args.format.render(&merged)?.as_bytes())?;
    Ok(report)
}
