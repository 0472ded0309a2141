//! yaml-locator
//!
//! Finds a YAML config by walking up parent directories and prints what a
//! load would see.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing::debug;
use yaml_locator::cli::candidates::run_candidates;
use yaml_locator::cli::show::{ShowArgs, run_show};
use yaml_locator::cli::which::run_which;
use yaml_locator::cli::{Cli, Command};
use yaml_locator::config::Locator;
use yaml_locator::logging::{self, LogOutput};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogOutput::parse(&cli.log), cli.verbose)?;

    let locator = Locator::new(cli.settings());
    debug!(settings = ?locator.settings(), "Resolved locator settings");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => {
            run_show(&locator, &ShowArgs::default(), &mut out)?;
        }
        Some(Command::Show(ref args)) => {
            run_show(&locator, args, &mut out)?;
        }
        Some(Command::Which) => run_which(&locator, &mut out)?,
        Some(Command::Candidates(ref args)) => run_candidates(&locator, args, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
