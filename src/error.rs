//! Structured error types for config lookup.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Per-candidate errors, recovered inside the search loop
    NotFoundOrUnreadable,
    ParseFailure,

    // Surfaced to callers
    ExhaustedSearch,
    EncodeFailure,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::NotFoundOrUnreadable => write!(f, "not_found_or_unreadable"),
            ErrorCode::ParseFailure => write!(f, "parse_failure"),
            ErrorCode::ExhaustedSearch => write!(f, "exhausted_search"),
            ErrorCode::EncodeFailure => write!(f, "encode_failure"),
        }
    }
}

/// Errors produced while locating and decoding a config file.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The candidate path does not exist or could not be read.
    #[error("couldn't read config {}: {source}", path.display())]
    NotFoundOrUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The candidate was read but its content did not decode into the destination.
    #[error("couldn't unmarshal config {}: {source}", path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Every candidate in range failed. `last` is the error of the final candidate.
    #[error("failed to find a valid {name:?}: {last}")]
    ExhaustedSearch {
        name: String,
        tried: Vec<PathBuf>,
        #[source]
        last: Box<LocateError>,
    },

    /// The destination value could not be turned into a tree to merge onto.
    #[error("couldn't encode destination value: {0}")]
    Encode(#[source] serde_json::Error),
}

impl LocateError {
    pub(crate) fn parse_failure(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ParseFailure {
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LocateError::NotFoundOrUnreadable { .. } => ErrorCode::NotFoundOrUnreadable,
            LocateError::ParseFailure { .. } => ErrorCode::ParseFailure,
            LocateError::ExhaustedSearch { .. } => ErrorCode::ExhaustedSearch,
            LocateError::Encode(_) => ErrorCode::EncodeFailure,
        }
    }

    /// True if the file simply was not there (as opposed to present but broken).
    ///
    /// For an exhausted search this reflects the last candidate tried.
    pub fn is_not_found(&self) -> bool {
        match self {
            LocateError::NotFoundOrUnreadable { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            LocateError::ExhaustedSearch { last, .. } => last.is_not_found(),
            _ => false,
        }
    }

    /// Paths tried before giving up. Empty for per-candidate errors.
    pub fn tried(&self) -> &[PathBuf] {
        match self {
            LocateError::ExhaustedSearch { tried, .. } => tried,
            _ => &[],
        }
    }
}

/// Result type for locator operations.
pub type LocateResult<T> = std::result::Result<T, LocateError>;
