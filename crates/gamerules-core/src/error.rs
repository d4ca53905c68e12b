//! Error types for gamerules-core

use std::path::PathBuf;

/// Result type for gamerules-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gamerules-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from gamerules-fs
    #[error(transparent)]
    Fs(#[from] gamerules_fs::Error),

    /// Persisted schema document could not be read or decoded
    #[error("Failed to read schema at {path}: {message}")]
    SchemaRead { path: PathBuf, message: String },

    /// Schema document could not be encoded for writing
    #[error("Failed to encode schema document: {0}")]
    SchemaEncode(#[from] serde_json::Error),
}
