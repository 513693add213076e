//! Error types for report extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a report run.
///
/// Field-level extraction misses are not errors; they only show up in
/// [`ParseDiagnostics`](crate::parser::ParseDiagnostics).
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem I/O failure on a specific path.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report bytes are not valid in the format's declared encoding.
    #[error("'{path}' is not valid {encoding} text")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Caller-supplied input is unusable (e.g. source is not a directory).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// CSV serialization failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for results with [`ReportError`].
pub type Result<T> = std::result::Result<T, ReportError>;
