//! Shared error types for abacus crates.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the shared foundation (path resolution, directory setup).
///
/// Higher-level crates wrap this via `#[from]` in their own error enums.
#[derive(Debug, Error)]
pub enum AbacusError {
    /// The home directory could not be resolved
    #[error("Could not determine home directory")]
    MissingHomeDir,

    /// Failed to create a directory
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for abacus-core operations.
pub type Result<T> = std::result::Result<T, AbacusError>;
