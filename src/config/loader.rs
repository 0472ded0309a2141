//! Primary + overrides loading.
//!
//! The primary file is mandatory. The overrides file is searched with the same
//! settings and merged on top of the primary values; failing to find or decode
//! it is never an error, only recorded on the returned [`LoadReport`].

use super::settings::LocatorSettings;
use crate::error::{LocateError, LocateResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::debug;

/// Locates and loads config files according to one immutable set of settings.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    settings: LocatorSettings,
}

/// Outcome of a successful load.
#[derive(Debug)]
pub struct LoadReport {
    /// Where the primary file was found.
    pub primary: PathBuf,
    /// Where the overrides file was found, if one was applied.
    pub overrides: Option<PathBuf>,
    /// Why no overrides file was applied. Set exactly when `overrides` is `None`.
    pub ignored: Option<LocateError>,
}

impl LoadReport {
    /// Whether an overrides file contributed to the result.
    pub fn has_overrides(&self) -> bool {
        self.overrides.is_some()
    }
}

impl Locator {
    pub fn new(settings: LocatorSettings) -> Self {
        Self { settings }
    }

    /// Locator built from defaults and `YAML_LOCATOR_*` environment variables.
    pub fn discover() -> Self {
        Self::new(LocatorSettings::discover())
    }

    pub fn settings(&self) -> &LocatorSettings {
        &self.settings
    }

    /// Load the primary file into `dest`, then best-effort the overrides file.
    ///
    /// Fields in `dest` that neither file mentions keep their current value.
    pub fn load_into<T>(&self, dest: &mut T) -> LocateResult<LoadReport>
    where
        T: Serialize + DeserializeOwned,
    {
        let primary = self.search(&self.settings.config_name, dest)?;

        let (overrides, ignored) = match self.search(&self.settings.overrides_name, dest) {
            Ok(path) => (Some(path), None),
            Err(err) => {
                debug!(
                    name = %self.settings.overrides_name,
                    error = %err,
                    "No overrides applied"
                );
                (None, Some(err))
            }
        };

        Ok(LoadReport {
            primary,
            overrides,
            ignored,
        })
    }

    /// Load into a fresh `T::default()`.
    pub fn load<T>(&self) -> LocateResult<T>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        let mut value = T::default();
        self.load_into(&mut value)?;
        Ok(value)
    }

    /// Like [`Locator::load_into`], but panics if the primary file can't be loaded.
    ///
    /// Meant for process startup where running without config is pointless.
    ///
    /// # Panics
    ///
    /// Panics with a `FATAL:` message carrying the search error.
    pub fn must_load_into<T>(&self, dest: &mut T) -> LoadReport
    where
        T: Serialize + DeserializeOwned,
    {
        match self.load_into(dest) {
            Ok(report) => report,
            Err(err) => panic!("FATAL: {err}"),
        }
    }
}

/// Load config into `dest` using [`LocatorSettings::discover`].
pub fn load<T>(dest: &mut T) -> LocateResult<LoadReport>
where
    T: Serialize + DeserializeOwned,
{
    Locator::discover().load_into(dest)
}

/// Load config into `dest` using [`LocatorSettings::discover`], panicking on failure.
///
/// # Panics
///
/// Panics with a `FATAL:` message if the primary file can't be found or decoded.
pub fn must_load<T>(dest: &mut T) -> LoadReport
where
    T: Serialize + DeserializeOwned,
{
    Locator::discover().must_load_into(dest)
}
