//! Codec error types.

use std::path::PathBuf;

/// Errors from reading or writing persisted artifacts.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a valid encoding
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The record decodes but does not describe a valid network
    #[error("invalid network record: {0}")]
    InvalidRecord(String),
}

impl CodecError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodecError::Io {
            path: path.into(),
            source,
        }
    }
}
