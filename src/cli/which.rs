//! `which`: report the files a load would use.

use crate::config::Locator;
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

/// Run the which command.
///
/// Loads into an untyped tree so any well-formed YAML counts as found.
pub fn run_which(locator: &Locator, out: &mut impl Write) -> Result<()> {
    let settings = locator.settings();
    let mut scratch = Value::Null;
    let report = locator.load_into(&mut scratch)?;

    writeln!(
        out,
        "{}: {}",
        settings.config_name,
        report.primary.display()
    )?;
    match (&report.overrides, &report.ignored) {
        (Some(path), _) => writeln!(out, "{}: {}", settings.overrides_name, path.display())?,
        (None, Some(err)) if err.is_not_found() => {
            writeln!(out, "{}: not found", settings.overrides_name)?
        }
        (None, Some(err)) => writeln!(out, "{}: skipped ({err})", settings.overrides_name)?,
        (None, None) => writeln!(out, "{}: not found", settings.overrides_name)?,
    }
    Ok(())
}
