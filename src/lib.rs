//! Upward-searching YAML config loader.
//!
//! Looks for `config.yaml` starting at a base path and stepping into parent
//! directories, then merges an optional `overrides.yaml` on top. Useful when
//! code runs from nested directories (tests, tools) but config lives at the
//! repository root.
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//! use yaml_locator::config::{Locator, LocatorSettings};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Settings {
//!     #[serde(default)]
//!     database_url: String,
//! }
//!
//! let locator = Locator::new(LocatorSettings::default().with_max_steps(3));
//! let settings: Settings = locator.load()?;
//! # Ok::<(), yaml_locator::error::LocateError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use config::{LoadReport, Locator, LocatorSettings, load, must_load};
pub use error::{ErrorCode, LocateError, LocateResult};
