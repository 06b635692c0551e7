//! Error types for BundleHash
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::EncodingError;

/// Result type alias for BundleHash operations
pub type BundleHashResult<T> = Result<T, BundleHashError>;

/// Main error type for BundleHash operations
#[derive(Error, Debug)]
pub enum BundleHashError {
    /// Stats JSON could not be parsed into an asset manifest
    #[error("invalid asset manifest in {source_name}: {message}")]
    InvalidManifest {
        source_name: String,
        message: String,
    },

    /// Config file is malformed or holds an unsupported value
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Mount-point matcher could not be compiled
    #[error("invalid mount point pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Text could not be decoded or encoded
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File watcher failure
    #[error("watch error: {0}")]
    Watch(String),
}
