//! Expense validation errors.

use duoledger_shared::types::YearMonth;
use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons an expense input is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Concept is empty or only whitespace.
    #[error("Concept cannot be empty")]
    EmptyConcept,

    /// Amount cannot be negative.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Installment count outside the supported range.
    #[error("Installment count must be between 1 and {max}, got {got}")]
    InvalidInstallmentCount {
        /// Requested count.
        got: u32,
        /// Largest supported count.
        max: u32,
    },

    /// Reimbursement cannot be negative.
    #[error("Reimbursement cannot be negative: {0}")]
    NegativeReimbursement(Decimal),

    /// Reimbursement larger than the purchase.
    #[error("Reimbursement {reimbursement} exceeds total amount {total}")]
    ReimbursementExceedsTotal {
        /// Requested reimbursement.
        reimbursement: Decimal,
        /// Purchase total.
        total: Decimal,
    },

    /// The schedule would run past the last representable month.
    #[error("{installment_count} installments starting {start_month} run past 9999-12")]
    ScheduleOutOfRange {
        /// Month of the first installment.
        start_month: YearMonth,
        /// Number of installments.
        installment_count: u32,
    },
}
