//! Error types for quota accounting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while tracking free-tier quota usage.
#[derive(Debug, Error)]
pub enum QuotaError {
    /// Configuration directory setup failed
    #[error(transparent)]
    Core(#[from] abacus_core::AbacusError),

    /// Usage log operation failed
    #[error(transparent)]
    Ledger(#[from] abacus_ledger::LedgerError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The activation date file exists but does not hold a valid instant
    #[error("Invalid activation date in {path}: {message}")]
    ActivationParse { path: PathBuf, message: String },
}

/// Result type alias for quota operations.
pub type Result<T> = std::result::Result<T, QuotaError>;
