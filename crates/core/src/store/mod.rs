//! Record store port.
//!
//! The ledger service reads and writes through [`LedgerStore`]; the db crate
//! provides the Postgres and in-memory implementations.

mod error;

use async_trait::async_trait;
use duoledger_shared::types::YearMonth;

use crate::balance::PeriodBalance;
use crate::expense::{
    CreateSimpleExpenseInput, InstallmentPlan, InstallmentPurchase, MonthlyInstallment,
    SimpleExpense,
};

pub use error::StoreError;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable storage for expenses, installments and cached balances.
///
/// Implementations assign ids and creation timestamps on append.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Prepares the backing collections. Safe to call repeatedly.
    async fn ensure_schema(&self) -> StoreResult<()>;

    /// Appends a validated simple expense.
    async fn append_simple_expense(
        &self,
        input: CreateSimpleExpenseInput,
    ) -> StoreResult<SimpleExpense>;

    /// Appends a validated installment purchase together with its schedule,
    /// expanded once from the purchase as stored.
    ///
    /// Either both the purchase and every installment are written or nothing
    /// is. Returns `StoreError::Rejected` if the schedule cannot be expanded.
    async fn append_installment_purchase_with_schedule(
        &self,
        plan: InstallmentPlan,
    ) -> StoreResult<(InstallmentPurchase, Vec<MonthlyInstallment>)>;

    /// Simple expenses dated in `period`, or all of them for `None`,
    /// ordered by `(date, created_at)`.
    async fn query_simple_expenses(
        &self,
        period: Option<YearMonth>,
    ) -> StoreResult<Vec<SimpleExpense>>;

    /// All installment purchases ordered by `(date, created_at)`.
    async fn query_installment_purchases(&self) -> StoreResult<Vec<InstallmentPurchase>>;

    /// Installments due in `period`, in purchase creation order then by
    /// installment number.
    async fn query_monthly_installments(
        &self,
        period: YearMonth,
    ) -> StoreResult<Vec<MonthlyInstallment>>;

    /// Stores `balance`, replacing any balance cached for the same period.
    async fn upsert_period_balance(&self, balance: &PeriodBalance) -> StoreResult<()>;

    /// Returns the balance cached for `period`, if any.
    async fn find_period_balance(&self, period: YearMonth) -> StoreResult<Option<PeriodBalance>>;
}
