//! CLI command definitions for yaml-locator
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod candidates;
pub mod show;
pub mod which;

use crate::config::LocatorSettings;
use candidates::CandidatesArgs;
use clap::{Parser, Subcommand};
use show::ShowArgs;
use std::path::PathBuf;

/// Locate YAML config files by walking up parent directories
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to start searching from (default: current directory)
    #[arg(short, long, global = true)]
    pub base_path: Option<PathBuf>,

    /// Name of the mandatory config file (default: config.yaml)
    #[arg(short, long, global = true)]
    pub config_name: Option<String>,

    /// Name of the optional overrides file (default: overrides.yaml)
    #[arg(short, long, global = true)]
    pub overrides_name: Option<String>,

    /// Parent directories to try above the base path (default: 5)
    #[arg(short, long, global = true)]
    pub max_steps: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load config and overrides and print the merged result (default)
    Show(ShowArgs),

    /// Print which files a load would use
    Which,

    /// List the paths searched for a file, in order
    Candidates(CandidatesArgs),
}

impl Cli {
    /// Locator settings: environment over defaults, flags over both.
    pub fn settings(&self) -> LocatorSettings {
        self.apply_flags(LocatorSettings::discover())
    }

    /// Apply command-line flags on top of `settings`.
    pub fn apply_flags(&self, mut settings: LocatorSettings) -> LocatorSettings {
        if let Some(ref base) = self.base_path {
            settings.base_path = base.clone();
        }
        if let Some(ref name) = self.config_name {
            settings.config_name = name.clone();
        }
        if let Some(ref name) = self.overrides_name {
            settings.overrides_name = name.clone();
        }
        if let Some(steps) = self.max_steps {
            settings.max_steps = steps;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from([
            "yaml-locator",
            "--base-path",
            "/srv/app",
            "--max-steps",
            "0",
            "which",
        ]);
        let settings = cli.apply_flags(LocatorSettings::default().with_config_name("app.yaml"));

        assert_eq!(settings.base_path, PathBuf::from("/srv/app"));
        assert_eq!(settings.max_steps, 0);
        assert_eq!(settings.config_name, "app.yaml");
        assert_eq!(settings.overrides_name, "overrides.yaml");
        assert!(matches!(cli.command, Some(Command::Which)));
    }

    #[test]
    fn test_show_format_and_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["yaml-locator", "show", "--format", "json", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Some(Command::Show(args)) => assert_eq!(args.format, OutputFormat::Json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_defaults_without_subcommand() {
        let cli = Cli::parse_from(["yaml-locator"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log, "2");
        assert!(!cli.verbose);
    }
}
