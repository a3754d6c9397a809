//! Error types for cost accounting.

use thiserror::Error;

/// Errors raised while tracking API spend.
#[derive(Debug, Error)]
pub enum CostError {
    /// Configuration directory setup failed
    #[error(transparent)]
    Core(#[from] abacus_core::AbacusError),

    /// Usage log operation failed
    #[error(transparent)]
    Ledger(#[from] abacus_ledger::LedgerError),
}

/// Result type alias for cost operations.
pub type Result<T> = std::result::Result<T, CostError>;
