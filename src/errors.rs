//! Error types for rapid_digest
//!
//! Summarization itself never fails; errors only come from loading a
//! lexicon or configuration, or from an invalid configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DigestError>;

/// Errors raised at the library boundary
#[derive(Debug, Error)]
pub enum DigestError {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A lexicon entry or source is malformed
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// Reading a resource from disk failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DigestError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_lexicon(message: impl Into<String>) -> Self {
        Self::InvalidLexicon(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
