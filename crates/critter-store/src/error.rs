//! Error types for the persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing the save directory.
///
/// Note that a *malformed* saved value is not an error anywhere in this
/// crate: unreadable data is treated as absent and defaults are substituted
/// by the caller. These variants cover genuine IO failures only.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The save directory could not be created or written.
    #[error("cannot access save directory {path}: {source}")]
    Io {
        /// Directory or file that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized for writing.
    #[error("cannot serialize save data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No save directory could be resolved for this platform.
    #[error("no data directory available on this platform")]
    NoDataDir,
}
