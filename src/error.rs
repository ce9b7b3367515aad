use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience result type used across ingestion and report writing.
pub type SurveyResult<T> = Result<T, SurveyError>;

/// Error type returned by this crate.
///
/// Short rows are deliberately absent: a row with fewer fields than the schema is not an error.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// Input not readable or output not writable.
    #[error("io error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error serializing the JSON report.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric field held non-empty, non-numeric text.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

impl SurveyError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
