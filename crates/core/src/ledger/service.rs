//! Ledger service orchestrating validation, amortization and balances.

use std::sync::Arc;

use duoledger_shared::types::YearMonth;
use tracing::{debug, info, warn};

use super::error::LedgerError;
use crate::amortization::AmortizationEngine;
use crate::balance::{BalanceCalculator, BalancesByType, PeriodBalance};
use crate::expense::{
    CreateInstallmentPurchaseInput, CreateSimpleExpenseInput, InstallmentPurchase,
    MonthlyExpenses, MonthlyInstallment, SimpleExpense,
};
use crate::store::LedgerStore;

/// Result type alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Entry point for every ledger operation.
///
/// Holds no state of its own: everything is read from and written to the
/// record store.
#[derive(Clone)]
pub struct LedgerService {
    store: Arc<dyn LedgerStore>,
}

impl LedgerService {
    /// Creates a service backed by `store`.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Prepares the record store.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Store` if the store cannot be prepared.
    pub async fn initialize(&self) -> LedgerResult<()> {
        self.store.ensure_schema().await?;
        info!("Ledger store initialized");
        Ok(())
    }

    /// Validates and records a one-off expense.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` for rejected input and
    /// `LedgerError::Store` if the append fails.
    pub async fn record_simple_expense(
        &self,
        input: CreateSimpleExpenseInput,
    ) -> LedgerResult<SimpleExpense> {
        let input = input.validate()?;
        let expense = self.store.append_simple_expense(input).await?;

        info!(
            expense_id = %expense.id,
            payer = %expense.payer,
            amount = %expense.amount,
            "Simple expense recorded"
        );
        Ok(expense)
    }

    /// Validates and records an installment purchase together with its
    /// monthly schedule.
    ///
    /// The store expands the schedule once, from the purchase as stored, and
    /// writes both in one unit. It is never recomputed afterwards.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` for rejected input and
    /// `LedgerError::Store` if the append fails.
    pub async fn record_installment_purchase(
        &self,
        input: CreateInstallmentPurchaseInput,
    ) -> LedgerResult<(InstallmentPurchase, Vec<MonthlyInstallment>)> {
        let plan = input.validate()?;
        let (purchase, schedule) = self
            .store
            .append_installment_purchase_with_schedule(plan)
            .await?;

        let unabsorbed = AmortizationEngine::unabsorbed_reimbursement(&purchase);
        if !unabsorbed.is_zero() {
            warn!(
                purchase_id = %purchase.id,
                unabsorbed = %unabsorbed,
                "Reimbursement exceeds installment schedule, remainder dropped"
            );
        }

        info!(
            purchase_id = %purchase.id,
            installments = schedule.len(),
            per_installment = %purchase.per_installment_amount,
            start_month = %purchase.start_month,
            "Installment purchase recorded"
        );
        Ok((purchase, schedule))
    }

    /// Simple expenses dated in `month` and installments due in `month`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Store` if a query fails.
    pub async fn expenses_for_month(&self, month: YearMonth) -> LedgerResult<MonthlyExpenses> {
        let simple_expenses = self.store.query_simple_expenses(Some(month)).await?;
        let monthly_installments = self.store.query_monthly_installments(month).await?;

        Ok(MonthlyExpenses {
            simple_expenses,
            monthly_installments,
        })
    }

    /// Every simple expense ever recorded.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Store` if the query fails.
    pub async fn all_simple_expenses(&self) -> LedgerResult<Vec<SimpleExpense>> {
        Ok(self.store.query_simple_expenses(None).await?)
    }

    /// Every installment purchase ever recorded.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Store` if the query fails.
    pub async fn installment_purchases(&self) -> LedgerResult<Vec<InstallmentPurchase>> {
        Ok(self.store.query_installment_purchases().await?)
    }

    /// Computes the unified balance for `month` and caches it in the store.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Store` if a query or the upsert fails.
    pub async fn balance_for_month(&self, month: YearMonth) -> LedgerResult<PeriodBalance> {
        let expenses = self.expenses_for_month(month).await?;
        let balance = BalanceCalculator::compute_balance(
            month,
            &expenses.simple_expenses,
            &expenses.monthly_installments,
        );

        self.store.upsert_period_balance(&balance).await?;

        debug!(
            period = %month,
            difference = %balance.settlement.difference,
            debtor = ?balance.settlement.debtor,
            "Period balance computed"
        );
        Ok(balance)
    }

    /// Computes the all-time simple balance and the installment balance for
    /// `month`, kept apart. Nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Store` if a query fails.
    pub async fn balances_by_type(&self, month: YearMonth) -> LedgerResult<BalancesByType> {
        let all_simple = self.store.query_simple_expenses(None).await?;
        let installments = self.store.query_monthly_installments(month).await?;

        Ok(BalanceCalculator::compute_balance_by_type(
            month,
            &all_simple,
            &installments,
        ))
    }

    /// Returns the balance last cached for `month`, if any.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Store` if the lookup fails.
    pub async fn stored_balance(&self, month: YearMonth) -> LedgerResult<Option<PeriodBalance>> {
        Ok(self.store.find_period_balance(month).await?)
    }
}
