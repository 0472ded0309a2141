//! Search settings for the locator.
//!
//! Built once, then read by every load. Precedence (lowest to highest):
//! built-in defaults, `YAML_LOCATOR_*` environment variables, then whatever
//! the caller sets through the `with_*` builders.

use std::path::PathBuf;
use tracing::warn;

/// Default name of the mandatory config file.
pub const DEFAULT_CONFIG_NAME: &str = "config.yaml";
/// Default name of the optional local overrides file.
pub const DEFAULT_OVERRIDES_NAME: &str = "overrides.yaml";
/// Default number of parent directories to step up.
pub const DEFAULT_MAX_STEPS: u32 = 5;

pub const ENV_CONFIG_NAME: &str = "YAML_LOCATOR_CONFIG_NAME";
pub const ENV_OVERRIDES_NAME: &str = "YAML_LOCATOR_OVERRIDES_NAME";
pub const ENV_BASE_PATH: &str = "YAML_LOCATOR_BASE_PATH";
pub const ENV_MAX_STEPS: &str = "YAML_LOCATOR_MAX_STEPS";

/// Where and what to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorSettings {
    /// Name of the mandatory config file.
    pub config_name: String,
    /// Name of the optional overrides file.
    pub overrides_name: String,
    /// Directory the search starts in. Relative paths resolve against the
    /// process working directory.
    pub base_path: PathBuf,
    /// How many parent directories to try above `base_path`. Zero means only
    /// `base_path` itself.
    pub max_steps: u32,
}

impl Default for LocatorSettings {
    fn default() -> Self {
        Self {
            config_name: DEFAULT_CONFIG_NAME.to_string(),
            overrides_name: DEFAULT_OVERRIDES_NAME.to_string(),
            base_path: PathBuf::from("."),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl LocatorSettings {
    /// Defaults overlaid with `YAML_LOCATOR_*` environment variables.
    pub fn discover() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`, keyed by the `ENV_*` names.
    ///
    /// Empty values are ignored. An unparseable step count is ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(name) = get(ENV_CONFIG_NAME) {
            settings.config_name = name;
        }

        if let Some(name) = get(ENV_OVERRIDES_NAME) {
            settings.overrides_name = name;
        }

        if let Some(base) = get(ENV_BASE_PATH) {
            settings.base_path = PathBuf::from(base);
        }

        if let Some(steps) = get(ENV_MAX_STEPS) {
            match steps.trim().parse() {
                Ok(steps) => settings.max_steps = steps,
                Err(_) => warn!(
                    var = ENV_MAX_STEPS,
                    value = %steps,
                    "Ignoring invalid max steps, expected a non-negative integer"
                ),
            }
        }

        settings
    }

    pub fn with_config_name(mut self, name: impl Into<String>) -> Self {
        self.config_name = name.into();
        self
    }

    pub fn with_overrides_name(mut self, name: impl Into<String>) -> Self {
        self.overrides_name = name.into();
        self
    }

    pub fn with_base_path(mut self, base: impl Into<PathBuf>) -> Self {
        self.base_path = base.into();
        self
    }

    pub fn with_max_steps(mut self, steps: u32) -> Self {
        self.max_steps = steps;
        self
    }
}
