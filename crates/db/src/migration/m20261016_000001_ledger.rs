//! Initial ledger schema.
//!
//! Creates the expense, installment and cached-balance tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(LEDGER_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS period_balances CASCADE;
             DROP TABLE IF EXISTS monthly_installments CASCADE;
             DROP TABLE IF EXISTS installment_purchases CASCADE;
             DROP TABLE IF EXISTS simple_expenses CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const LEDGER_SQL: &str = r"
-- One-off expenses
CREATE TABLE simple_expenses (
    id UUID PRIMARY KEY,
    concept TEXT NOT NULL,
    amount NUMERIC NOT NULL,
    payer VARCHAR(16) NOT NULL,
    date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_simple_amount CHECK (amount >= 0),
    CONSTRAINT chk_simple_payer CHECK (payer IN ('Manuel', 'Pablo'))
);

CREATE INDEX idx_simple_expenses_date ON simple_expenses(date, created_at);

-- Purchases paid in monthly installments
CREATE TABLE installment_purchases (
    id UUID PRIMARY KEY,
    concept TEXT NOT NULL,
    total_amount NUMERIC NOT NULL,
    installment_count INTEGER NOT NULL,
    per_installment_amount NUMERIC NOT NULL,
    start_month CHAR(7) NOT NULL,
    reimbursement NUMERIC,
    payer VARCHAR(16) NOT NULL,
    date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_purchase_total CHECK (total_amount >= 0),
    CONSTRAINT chk_purchase_count CHECK (installment_count >= 1),
    CONSTRAINT chk_purchase_reimbursement CHECK (reimbursement IS NULL OR reimbursement >= 0),
    CONSTRAINT chk_purchase_payer CHECK (payer IN ('Manuel', 'Pablo'))
);

CREATE INDEX idx_installment_purchases_date ON installment_purchases(date, created_at);

-- Expanded schedule, written once per purchase
CREATE TABLE monthly_installments (
    purchase_id UUID NOT NULL REFERENCES installment_purchases(id) ON DELETE CASCADE,
    installment_number INTEGER NOT NULL,
    concept TEXT NOT NULL,
    month CHAR(7) NOT NULL,
    original_amount NUMERIC NOT NULL,
    reimbursement_applied NUMERIC NOT NULL,
    payable_amount NUMERIC NOT NULL,
    payer VARCHAR(16) NOT NULL,
    PRIMARY KEY (purchase_id, installment_number),
    CONSTRAINT chk_installment_payable CHECK (payable_amount = original_amount - reimbursement_applied)
);

CREATE INDEX idx_monthly_installments_month ON monthly_installments(month);

-- Cached unified balance, one row per month
CREATE TABLE period_balances (
    period CHAR(7) PRIMARY KEY,
    total_manuel NUMERIC NOT NULL,
    total_pablo NUMERIC NOT NULL,
    difference NUMERIC NOT NULL,
    debtor VARCHAR(16),
    amount_owed NUMERIC NOT NULL,
    simple_manuel NUMERIC NOT NULL,
    simple_pablo NUMERIC NOT NULL,
    installment_manuel NUMERIC NOT NULL,
    installment_pablo NUMERIC NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";
