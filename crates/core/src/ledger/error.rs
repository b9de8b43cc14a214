//! Ledger service errors.

use duoledger_shared::AppError;
use thiserror::Error;

use crate::expense::ExpenseError;
use crate::store::StoreError;

/// Errors returned by `LedgerService`.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The input was rejected before touching the store.
    #[error("Invalid input: {0}")]
    Validation(#[from] ExpenseError),

    /// The record store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation(e) | LedgerError::Store(StoreError::Rejected(e)) => {
                Self::Validation(e.to_string())
            }
            LedgerError::Store(e) => Self::Database(e.to_string()),
        }
    }
}
