//! SeaORM-backed record store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};
use uuid::Uuid;

use duoledger_core::amortization::AmortizationEngine;
use duoledger_core::balance::PeriodBalance;
use duoledger_core::expense::{
    CreateSimpleExpenseInput, InstallmentPlan, InstallmentPurchase, MonthlyInstallment,
    SimpleExpense,
};
use duoledger_core::store::{LedgerStore, StoreError, StoreResult};
use duoledger_shared::types::{InstallmentPurchaseId, YearMonth};

use super::mapping::{self, backend};
use crate::migration::Migrator;
use crate::repositories::{BalanceRepository, ExpenseRepository};

/// Record store persisting to Postgres through SeaORM.
#[derive(Debug, Clone)]
pub struct PgLedgerStore {
    db: DatabaseConnection,
    expenses: ExpenseRepository,
    balances: BalanceRepository,
}

impl PgLedgerStore {
    /// Creates a store over an established connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            expenses: ExpenseRepository::new(db.clone()),
            balances: BalanceRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl LedgerStore for PgLedgerStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        Migrator::up(&self.db, None).await.map_err(backend)?;
        info!("Database migrations applied");
        Ok(())
    }

    async fn append_simple_expense(
        &self,
        input: CreateSimpleExpenseInput,
    ) -> StoreResult<SimpleExpense> {
        let row = self
            .expenses
            .create_simple_expense(Uuid::now_v7(), input, Utc::now())
            .await
            .map_err(backend)?;
        mapping::simple_expense(row)
    }

    async fn append_installment_purchase_with_schedule(
        &self,
        plan: InstallmentPlan,
    ) -> StoreResult<(InstallmentPurchase, Vec<MonthlyInstallment>)> {
        let purchase = plan.into_purchase(InstallmentPurchaseId::new(), Utc::now());
        let schedule = AmortizationEngine::expand(&purchase)?;

        let row = self
            .expenses
            .create_installment_purchase(&purchase, &schedule)
            .await
            .map_err(backend)?;
        debug!(
            purchase_id = %purchase.id,
            count = schedule.len(),
            "Installment purchase and schedule inserted"
        );

        // The row carries the timestamp at the precision Postgres kept.
        Ok((mapping::installment_purchase(row)?, schedule))
    }

    async fn query_simple_expenses(
        &self,
        period: Option<YearMonth>,
    ) -> StoreResult<Vec<SimpleExpense>> {
        let range = period
            .map(|p| {
                p.date_range()
                    .ok_or_else(|| StoreError::backend(format!("month {p} outside date range")))
            })
            .transpose()?;

        self.expenses
            .list_simple_expenses(range)
            .await
            .map_err(backend)?
            .into_iter()
            .map(mapping::simple_expense)
            .collect()
    }

    async fn query_installment_purchases(&self) -> StoreResult<Vec<InstallmentPurchase>> {
        self.expenses
            .list_installment_purchases()
            .await
            .map_err(backend)?
            .into_iter()
            .map(mapping::installment_purchase)
            .collect()
    }

    async fn query_monthly_installments(
        &self,
        period: YearMonth,
    ) -> StoreResult<Vec<MonthlyInstallment>> {
        self.expenses
            .list_monthly_installments(&period.to_string())
            .await
            .map_err(backend)?
            .into_iter()
            .map(mapping::monthly_installment)
            .collect()
    }

    async fn upsert_period_balance(&self, balance: &PeriodBalance) -> StoreResult<()> {
        self.balances.upsert(balance).await.map_err(backend)
    }

    async fn find_period_balance(&self, period: YearMonth) -> StoreResult<Option<PeriodBalance>> {
        self.balances
            .find(&period.to_string())
            .await
            .map_err(backend)?
            .map(mapping::period_balance)
            .transpose()
    }
}
