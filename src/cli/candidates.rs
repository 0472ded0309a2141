//! `candidates`: list the search path for a file name.

use crate::config::Locator;
use anyhow::Result;
use clap::Args;
use std::io::Write;

/// Arguments for the candidates command.
#[derive(Args, Debug, Default)]
pub struct CandidatesArgs {
    /// File name to search for (default: the config file name)
    pub name: Option<String>,
}

/// Run the candidates command. Existing files are marked with `*`.
pub fn run_candidates(locator: &Locator, args: &CandidatesArgs, out: &mut impl Write) -> Result<()> {
    let name = args
        .name
        .as_deref()
        .unwrap_or(&locator.settings().config_name);

    for path in locator.candidates(name) {
        let marker = if path.is_file() { '*' } else { ' ' };
        writeln!(out, "{marker} {}", path.display())?;
    }
    Ok(())
}
