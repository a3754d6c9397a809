//! Error types for the usage log.

use thiserror::Error;

/// Errors raised while appending to or reading the usage log.
///
/// Malformed log lines are not errors; they surface as skip outcomes from
/// [`crate::store::UsageLog::records`] instead.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
