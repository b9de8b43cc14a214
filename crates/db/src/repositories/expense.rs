//! Expense repository for database operations.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use duoledger_core::expense::{CreateSimpleExpenseInput, InstallmentPurchase, MonthlyInstallment};

use crate::entities::{installment_purchases, monthly_installments, simple_expenses};

fn to_i32(value: u32, what: &str) -> Result<i32, DbErr> {
    i32::try_from(value).map_err(|_| DbErr::Custom(format!("{what} {value} too large")))
}

fn purchase_model(
    purchase: &InstallmentPurchase,
) -> Result<installment_purchases::ActiveModel, DbErr> {
    Ok(installment_purchases::ActiveModel {
        id: Set(purchase.id.into_inner()),
        concept: Set(purchase.concept.clone()),
        total_amount: Set(purchase.total_amount),
        installment_count: Set(to_i32(purchase.installment_count, "installment count")?),
        per_installment_amount: Set(purchase.per_installment_amount),
        start_month: Set(purchase.start_month.to_string()),
        reimbursement: Set(purchase.reimbursement),
        payer: Set(purchase.payer.to_string()),
        date: Set(purchase.date),
        created_at: Set(purchase.created_at.into()),
    })
}

fn installment_model(
    installment: &MonthlyInstallment,
) -> Result<monthly_installments::ActiveModel, DbErr> {
    Ok(monthly_installments::ActiveModel {
        purchase_id: Set(installment.purchase_id.into_inner()),
        installment_number: Set(to_i32(installment.installment_number, "installment number")?),
        concept: Set(installment.concept.clone()),
        month: Set(installment.month.to_string()),
        original_amount: Set(installment.original_amount),
        reimbursement_applied: Set(installment.reimbursement_applied),
        payable_amount: Set(installment.payable_amount),
        payer: Set(installment.payer.to_string()),
    })
}

/// Repository for simple expenses, installment purchases and their schedules.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a simple expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create_simple_expense(
        &self,
        id: Uuid,
        input: CreateSimpleExpenseInput,
        created_at: DateTime<Utc>,
    ) -> Result<simple_expenses::Model, DbErr> {
        simple_expenses::ActiveModel {
            id: Set(id),
            concept: Set(input.concept),
            amount: Set(input.amount),
            payer: Set(input.payer.to_string()),
            date: Set(input.date),
            created_at: Set(created_at.into()),
        }
        .insert(&self.db)
        .await
    }

    /// Inserts an installment purchase and its schedule in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is written in that case.
    pub async fn create_installment_purchase(
        &self,
        purchase: &InstallmentPurchase,
        schedule: &[MonthlyInstallment],
    ) -> Result<installment_purchases::Model, DbErr> {
        let header = purchase_model(purchase)?;
        let rows = schedule
            .iter()
            .map(installment_model)
            .collect::<Result<Vec<_>, DbErr>>()?;

        let txn = self.db.begin().await?;

        let stored = header.insert(&txn).await?;
        Self::insert_schedule(&txn, rows).await?;

        txn.commit().await?;
        Ok(stored)
    }

    /// Inserts schedule rows inside an open transaction.
    async fn insert_schedule(
        txn: &DatabaseTransaction,
        rows: Vec<monthly_installments::ActiveModel>,
    ) -> Result<(), DbErr> {
        if rows.is_empty() {
            return Ok(());
        }
        monthly_installments::Entity::insert_many(rows)
            .exec(txn)
            .await?;
        Ok(())
    }

    /// Lists simple expenses, optionally limited to `[from, until)`, ordered by
    /// date then creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_simple_expenses(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<simple_expenses::Model>, DbErr> {
        let mut query = simple_expenses::Entity::find();

        if let Some((from, until)) = range {
            query = query
                .filter(simple_expenses::Column::Date.gte(from))
                .filter(simple_expenses::Column::Date.lt(until));
        }

        query
            .order_by_asc(simple_expenses::Column::Date)
            .order_by_asc(simple_expenses::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Lists all installment purchases ordered by date then creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_installment_purchases(
        &self,
    ) -> Result<Vec<installment_purchases::Model>, DbErr> {
        installment_purchases::Entity::find()
            .order_by_asc(installment_purchases::Column::Date)
            .order_by_asc(installment_purchases::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Lists the installments due in `month` (`YYYY-MM`), ordered by purchase
    /// creation then installment number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_monthly_installments(
        &self,
        month: &str,
    ) -> Result<Vec<monthly_installments::Model>, DbErr> {
        monthly_installments::Entity::find()
            .inner_join(installment_purchases::Entity)
            .filter(monthly_installments::Column::Month.eq(month))
            .order_by_asc(installment_purchases::Column::CreatedAt)
            .order_by_asc(monthly_installments::Column::PurchaseId)
            .order_by_asc(monthly_installments::Column::InstallmentNumber)
            .all(&self.db)
            .await
    }
}
