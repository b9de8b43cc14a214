//! Record store errors.

use thiserror::Error;

use crate::expense::ExpenseError;

/// Failures reported by a `LedgerStore` backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),

    /// A stored row could not be mapped back to a domain value.
    #[error("corrupt stored record: {0}")]
    Corrupt(String),

    /// The record was refused before anything was written.
    #[error("record rejected: {0}")]
    Rejected(#[from] ExpenseError),
}

impl StoreError {
    /// Create a backend error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Create a corrupt record error.
    #[must_use]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt(message.into())
    }
}
