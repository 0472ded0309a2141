//! Upward directory search for a single named file.
//!
//! Candidates are the base path itself, then each ancestor level above it,
//! spelled with `..` segments (`base/..`, `base/../..`, ...) and resolved by
//! the OS, so relative base paths work against the process working directory.

use super::loader::Locator;
use super::merge::{merge_into, merge_variants_into};
use crate::error::{LocateError, LocateResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

impl Locator {
    /// Candidate paths for `name` in search order.
    ///
    /// At most `max_steps + 1` of them, fewer when the filesystem root is
    /// reached first: above the root `..` names the root again.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        self.candidate_iter(name).collect()
    }

    fn candidate_iter<'a>(&'a self, name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        let base = &self.settings().base_path;
        let steps = self.settings().max_steps.min(ancestor_count(base));
        (0..=steps).scan(base.clone(), move |dir, step| {
            if step > 0 {
                dir.push("..");
            }
            Some(dir.join(name))
        })
    }

    /// Find `name` and decode it onto `dest`, returning the path that was used.
    ///
    /// A candidate that is missing, unreadable, malformed, or does not fit
    /// `T` is skipped. `dest` is only written once a candidate decodes
    /// cleanly; if none does it is left as it was.
    pub fn search<T>(&self, name: &str, dest: &mut T) -> LocateResult<PathBuf>
    where
        T: Serialize + DeserializeOwned,
    {
        let current = serde_json::to_value(&*dest).map_err(LocateError::Encode)?;

        let mut tried = Vec::new();
        let mut last = None;
        for path in self.candidate_iter(name) {
            match decode_onto::<T>(&path, &current) {
                Ok(value) => {
                    debug!(path = %path.display(), "Loaded config");
                    *dest = value;
                    return Ok(path);
                }
                Err(err) => {
                    debug!(path = %path.display(), code = %err.code(), "Skipping config candidate");
                    tried.push(path);
                    last = Some(err);
                }
            }
        }

        // The range always holds at least the base path, so `last` is set;
        // fall back to a not-found on the base candidate all the same.
        let last = last.unwrap_or_else(|| LocateError::NotFoundOrUnreadable {
            path: self.settings().base_path.join(name),
            source: std::io::ErrorKind::NotFound.into(),
        });
        Err(LocateError::ExhaustedSearch {
            name: name.to_string(),
            tried,
            last: Box::new(last),
        })
    }
}

/// Read `path`, parse it as YAML, merge it onto `current`, and decode as `T`.
fn decode_onto<T: DeserializeOwned>(path: &Path, current: &Value) -> LocateResult<T> {
    let content =
        std::fs::read_to_string(path).map_err(|source| LocateError::NotFoundOrUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let overlay: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(&content).map_err(|e| LocateError::parse_failure(path, e))?
    };

    // A document holding only `~` changes nothing, like an empty one.
    if overlay.is_null() {
        return serde_json::from_value(current.clone())
            .map_err(|e| LocateError::parse_failure(path, e));
    }

    let mut merged = current.clone();
    merge_into(&mut merged, overlay.clone());
    match serde_json::from_value(merged) {
        Ok(value) => Ok(value),
        Err(err) => {
            // Retry treating a switched single-key mapping as a new enum variant.
            let mut replaced = current.clone();
            merge_variants_into(&mut replaced, overlay);
            serde_json::from_value(replaced).map_err(|_| LocateError::parse_failure(path, err))
        }
    }
}

/// Number of directories above `base` on disk. Zero if `base` can't be resolved,
/// since nothing above a missing directory can be reached through it.
fn ancestor_count(base: &Path) -> u32 {
    std::fs::canonicalize(base)
        .map(|resolved| {
            let normal = resolved
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count();
            u32::try_from(normal).unwrap_or(u32::MAX)
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocatorSettings;
    use crate::error::ErrorCode;
    use serde::Deserialize;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        name: String,
        #[serde(default)]
        port: u16,
    }

    fn locator(base: &Path, steps: u32) -> Locator {
        Locator::new(
            LocatorSettings::default()
                .with_base_path(base)
                .with_max_steps(steps),
        )
    }

    #[test]
    fn test_candidates_step_one_level_each() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("a").join("b");
        fs::create_dir_all(&base).unwrap();

        let loc = locator(&base, 2);
        assert_eq!(
            loc.candidates("config.yaml"),
            vec![
                base.join("config.yaml"),
                base.join("..").join("config.yaml"),
                base.join("..").join("..").join("config.yaml"),
            ]
        );
    }

    #[test]
    fn test_candidates_stop_at_filesystem_root() {
        let temp = TempDir::new().unwrap();
        let depth = fs::canonicalize(temp.path())
            .unwrap()
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count();

        let candidates = locator(temp.path(), u32::MAX).candidates("config.yaml");
        assert_eq!(candidates.len(), depth + 1);

        let top = candidates.last().unwrap().parent().unwrap();
        assert_eq!(fs::canonicalize(top).unwrap().parent(), None);
    }

    #[test]
    fn test_missing_base_has_single_candidate() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        assert_eq!(
            locator(&missing, 5).candidates("config.yaml"),
            vec![missing.join("config.yaml")]
        );
    }

    #[test]
    fn test_zero_steps_is_base_only() {
        let loc = locator(Path::new("."), 0);
        assert_eq!(loc.candidates("x.yaml"), vec![PathBuf::from("./x.yaml")]);
    }

    #[test]
    fn test_search_finds_base_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yaml"), "name: svc\nport: 80\n").unwrap();

        let mut dest = Sample::default();
        let found = locator(temp.path(), 0).search("config.yaml", &mut dest).unwrap();

        assert_eq!(found, temp.path().join("config.yaml"));
        assert_eq!(dest, Sample { name: "svc".into(), port: 80 });
    }

    #[test]
    fn test_malformed_candidate_is_skipped() {
        let temp = TempDir::new().unwrap();
        let child = temp.path().join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(child.join("config.yaml"), "name: [unclosed").unwrap();
        fs::write(temp.path().join("config.yaml"), "name: parent\n").unwrap();

        let mut dest = Sample::default();
        let found = locator(&child, 1).search("config.yaml", &mut dest).unwrap();

        assert_eq!(found, child.join("..").join("config.yaml"));
        assert_eq!(dest.name, "parent");
    }

    #[test]
    fn test_wrong_shape_is_skipped() {
        let temp = TempDir::new().unwrap();
        let child = temp.path().join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(child.join("config.yaml"), "port: not-a-number\n").unwrap();
        fs::write(temp.path().join("config.yaml"), "port: 7\n").unwrap();

        let mut dest = Sample::default();
        locator(&child, 1).search("config.yaml", &mut dest).unwrap();
        assert_eq!(dest.port, 7);
    }

    #[test]
    fn test_exhausted_reports_last_candidate() {
        let temp = TempDir::new().unwrap();
        let child = temp.path().join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(temp.path().join("config.yaml"), "port: [1, 2]\n").unwrap();

        let mut dest = Sample { name: "keep".into(), port: 1 };
        let err = locator(&child, 1).search("config.yaml", &mut dest).unwrap_err();

        assert_eq!(err.code(), ErrorCode::ExhaustedSearch);
        assert_eq!(err.tried().len(), 2);
        match &err {
            LocateError::ExhaustedSearch { last, .. } => {
                assert_eq!(last.code(), ErrorCode::ParseFailure)
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("config.yaml"));
        assert_eq!(dest, Sample { name: "keep".into(), port: 1 });
    }

    #[test]
    fn test_empty_file_changes_nothing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yaml"), "\n").unwrap();

        let mut dest = Sample { name: "prior".into(), port: 3 };
        locator(temp.path(), 0).search("config.yaml", &mut dest).unwrap();
        assert_eq!(dest, Sample { name: "prior".into(), port: 3 });
    }

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct WithToken {
        #[serde(default)]
        token: Option<String>,
        #[serde(default)]
        name: String,
    }

    #[test]
    fn test_explicit_null_clears_option() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yaml"), "token: ~\n").unwrap();

        let mut dest = WithToken {
            token: Some("abc".into()),
            name: "svc".into(),
        };
        locator(temp.path(), 0).search("config.yaml", &mut dest).unwrap();

        assert_eq!(dest.token, None);
        assert_eq!(dest.name, "svc");
    }
}
