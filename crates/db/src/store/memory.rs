//! Process-local record store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::RwLock;

use duoledger_core::amortization::AmortizationEngine;
use duoledger_core::balance::PeriodBalance;
use duoledger_core::expense::{
    CreateSimpleExpenseInput, InstallmentPlan, InstallmentPurchase, MonthlyInstallment,
    SimpleExpense,
};
use duoledger_core::store::{LedgerStore, StoreResult};
use duoledger_shared::types::{InstallmentPurchaseId, SimpleExpenseId, YearMonth};

/// Record store kept in memory, lost on restart.
///
/// Used when no database is configured and in tests. Locks are always taken
/// purchases first, then installments.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    simple_expenses: RwLock<Vec<SimpleExpense>>,
    purchases: RwLock<Vec<InstallmentPurchase>>,
    installments: RwLock<Vec<MonthlyInstallment>>,
    balances: DashMap<YearMonth, PeriodBalance>,
}

impl InMemoryLedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn append_simple_expense(
        &self,
        input: CreateSimpleExpenseInput,
    ) -> StoreResult<SimpleExpense> {
        let expense = input.into_expense(SimpleExpenseId::new(), Utc::now());
        self.simple_expenses.write().await.push(expense.clone());
        Ok(expense)
    }

    async fn append_installment_purchase_with_schedule(
        &self,
        plan: InstallmentPlan,
    ) -> StoreResult<(InstallmentPurchase, Vec<MonthlyInstallment>)> {
        let purchase = plan.into_purchase(InstallmentPurchaseId::new(), Utc::now());
        let schedule = AmortizationEngine::expand(&purchase)?;

        let mut purchases = self.purchases.write().await;
        let mut installments = self.installments.write().await;
        purchases.push(purchase.clone());
        installments.extend_from_slice(&schedule);

        Ok((purchase, schedule))
    }

    async fn query_simple_expenses(
        &self,
        period: Option<YearMonth>,
    ) -> StoreResult<Vec<SimpleExpense>> {
        let mut expenses: Vec<SimpleExpense> = self
            .simple_expenses
            .read()
            .await
            .iter()
            .filter(|e| period.is_none_or(|p| p.contains(e.date)))
            .cloned()
            .collect();
        expenses.sort_by_key(|e| (e.date, e.created_at));
        Ok(expenses)
    }

    async fn query_installment_purchases(&self) -> StoreResult<Vec<InstallmentPurchase>> {
        let mut purchases = self.purchases.read().await.clone();
        purchases.sort_by_key(|p| (p.date, p.created_at));
        Ok(purchases)
    }

    async fn query_monthly_installments(
        &self,
        period: YearMonth,
    ) -> StoreResult<Vec<MonthlyInstallment>> {
        let purchases = self.purchases.read().await;
        let installments = self.installments.read().await;

        let created: HashMap<InstallmentPurchaseId, _> =
            purchases.iter().map(|p| (p.id, p.created_at)).collect();
        let mut due: Vec<MonthlyInstallment> = installments
            .iter()
            .filter(|i| i.month == period)
            .cloned()
            .collect();
        due.sort_by_key(|i| {
            (
                created.get(&i.purchase_id).copied(),
                i.purchase_id,
                i.installment_number,
            )
        });
        Ok(due)
    }

    async fn upsert_period_balance(&self, balance: &PeriodBalance) -> StoreResult<()> {
        self.balances.insert(balance.period, balance.clone());
        Ok(())
    }

    async fn find_period_balance(&self, period: YearMonth) -> StoreResult<Option<PeriodBalance>> {
        Ok(self.balances.get(&period).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use duoledger_core::balance::BalanceCalculator;
    use duoledger_core::expense::{CreateInstallmentPurchaseInput, ExpenseError};
    use duoledger_core::store::StoreError;
    use duoledger_shared::types::Person;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    fn expense(on: (i32, u32, u32), concept: &str) -> CreateSimpleExpenseInput {
        CreateSimpleExpenseInput {
            concept: concept.to_string(),
            amount: dec!(10),
            payer: Person::Pablo,
            date: NaiveDate::from_ymd_opt(on.0, on.1, on.2).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_simple_expenses_sorted_by_date() {
        let store = InMemoryLedgerStore::new();
        let inputs = [
            ((2024, 3, 20), "late"),
            ((2024, 3, 1), "early"),
            ((2024, 4, 1), "april"),
        ];
        for (on, concept) in inputs {
            store.append_simple_expense(expense(on, concept)).await.unwrap();
        }

        let march = store.query_simple_expenses(Some(ym("2024-03"))).await.unwrap();
        let concepts: Vec<&str> = march.iter().map(|e| e.concept.as_str()).collect();
        assert_eq!(concepts, vec!["early", "late"]);

        let all = store.query_simple_expenses(None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].concept, "april");
    }

    #[tokio::test]
    async fn test_installments_filtered_by_month() {
        let store = InMemoryLedgerStore::new();
        let plan = CreateInstallmentPurchaseInput {
            concept: "Notebook".to_string(),
            total_amount: dec!(300),
            installment_count: 3,
            start_month: ym("2024-12"),
            reimbursement: None,
            payer: Person::Manuel,
            date: NaiveDate::from_ymd_opt(2024, 12, 3).unwrap(),
        }
        .validate()
        .unwrap();
        let (purchase, _) = store
            .append_installment_purchase_with_schedule(plan)
            .await
            .unwrap();

        let january = store.query_monthly_installments(ym("2025-01")).await.unwrap();
        assert_eq!(january.len(), 1);
        assert_eq!(january[0].installment_number, 2);
        assert!(
            store
                .query_monthly_installments(ym("2025-03"))
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            store.query_installment_purchases().await.unwrap(),
            vec![purchase]
        );
    }

    fn plan(concept: &str, count: u32, start: &str) -> InstallmentPlan {
        InstallmentPlan {
            concept: concept.to_string(),
            total_amount: dec!(100) * Decimal::from(count),
            installment_count: count,
            per_installment_amount: dec!(100),
            start_month: ym(start),
            reimbursement: None,
            payer: Person::Pablo,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_failed_schedule_leaves_nothing_behind() {
        let store = InMemoryLedgerStore::new();

        let err = store
            .append_installment_purchase_with_schedule(plan("Moto", 2, "9999-12"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::Rejected(ExpenseError::ScheduleOutOfRange { .. })
        ));
        assert!(store.query_installment_purchases().await.unwrap().is_empty());
        assert!(store.installments.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_installments_follow_purchase_creation_order() {
        let store = InMemoryLedgerStore::new();
        let now = Utc::now();
        let first = plan("Tele", 2, "2024-03").into_purchase(InstallmentPurchaseId::new(), now);
        let second = plan("Sillon", 2, "2024-03")
            .into_purchase(InstallmentPurchaseId::new(), now + Duration::seconds(1));

        // Schedules stored out of creation order, as interleaved writers would leave them.
        store.purchases.write().await.extend([first.clone(), second.clone()]);
        for purchase in [&second, &first] {
            let schedule = AmortizationEngine::expand(purchase).unwrap();
            store.installments.write().await.extend(schedule);
        }

        let march = store.query_monthly_installments(ym("2024-03")).await.unwrap();
        let concepts: Vec<&str> = march.iter().map(|i| i.concept.as_str()).collect();
        assert_eq!(concepts, vec!["Tele", "Sillon"]);
    }

    #[tokio::test]
    async fn test_balance_upsert_is_last_write_wins() {
        let store = InMemoryLedgerStore::new();
        let period = ym("2024-03");
        assert_eq!(store.find_period_balance(period).await.unwrap(), None);

        let first = BalanceCalculator::compute_balance(period, &[], &[]);
        store.upsert_period_balance(&first).await.unwrap();

        let recorded =
            expense((2024, 3, 2), "Super").into_expense(SimpleExpenseId::new(), Utc::now());
        let second = BalanceCalculator::compute_balance(period, &[recorded], &[]);
        store.upsert_period_balance(&second).await.unwrap();

        assert_eq!(
            store.find_period_balance(period).await.unwrap(),
            Some(second)
        );
        assert_eq!(store.balances.len(), 1);
    }
}
