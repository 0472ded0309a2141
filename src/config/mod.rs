//! Config file discovery.
//!
//! Finds a YAML config by trying the base path, then each parent directory
//! above it up to a step limit, and merges an optional overrides file on top:
//! 1. **Primary** - `config.yaml`, mandatory
//! 2. **Overrides** - `overrides.yaml`, optional, for local customization
//!
//! ## Merge Strategy
//! Both files are deep-merged field-by-field onto the caller's value, so
//! anything the overrides file leaves out keeps its primary (or prior) value.
//!
//! ## Environment Variables
//! - `YAML_LOCATOR_CONFIG_NAME` - Primary file name (default: `config.yaml`)
//! - `YAML_LOCATOR_OVERRIDES_NAME` - Overrides file name (default: `overrides.yaml`)
//! - `YAML_LOCATOR_BASE_PATH` - Where the search starts (default: `.`)
//! - `YAML_LOCATOR_MAX_STEPS` - Parent directories to try (default: `5`)

mod loader;
mod merge;
mod search;
mod settings;

pub use loader::{LoadReport, Locator, load, must_load};
pub use merge::{deep_merge, merge_into, merge_variants_into};
pub use settings::*;
