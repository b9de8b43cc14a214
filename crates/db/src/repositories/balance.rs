//! Period balance repository for database operations.

use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};

use duoledger_core::balance::PeriodBalance;

use crate::entities::period_balances;

/// Repository for cached period balances.
#[derive(Debug, Clone)]
pub struct BalanceRepository {
    db: DatabaseConnection,
}

impl BalanceRepository {
    /// Creates a new balance repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the balance, or overwrites the row already stored for its period.
    ///
    /// # Errors
    ///
    /// Returns an error if the database upsert fails.
    pub async fn upsert(&self, balance: &PeriodBalance) -> Result<(), DbErr> {
        let settlement = &balance.settlement;
        let model = period_balances::ActiveModel {
            period: Set(balance.period.to_string()),
            total_manuel: Set(settlement.totals.manuel),
            total_pablo: Set(settlement.totals.pablo),
            difference: Set(settlement.difference),
            debtor: Set(settlement.debtor.map(|p| p.to_string())),
            amount_owed: Set(settlement.amount_owed),
            simple_manuel: Set(balance.simple_totals.manuel),
            simple_pablo: Set(balance.simple_totals.pablo),
            installment_manuel: Set(balance.installment_totals.manuel),
            installment_pablo: Set(balance.installment_totals.pablo),
            updated_at: Set(chrono::Utc::now().into()),
        };

        period_balances::Entity::insert(model)
            .on_conflict(
                OnConflict::column(period_balances::Column::Period)
                    .update_columns([
                        period_balances::Column::TotalManuel,
                        period_balances::Column::TotalPablo,
                        period_balances::Column::Difference,
                        period_balances::Column::Debtor,
                        period_balances::Column::AmountOwed,
                        period_balances::Column::SimpleManuel,
                        period_balances::Column::SimplePablo,
                        period_balances::Column::InstallmentManuel,
                        period_balances::Column::InstallmentPablo,
                        period_balances::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Finds the balance stored for `period` (`YYYY-MM`).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find(&self, period: &str) -> Result<Option<period_balances::Model>, DbErr> {
        period_balances::Entity::find_by_id(period.to_string())
            .one(&self.db)
            .await
    }
}
