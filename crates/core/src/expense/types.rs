//! Expense data types.

use chrono::{DateTime, NaiveDate, Utc};
use duoledger_shared::types::{InstallmentPurchaseId, Person, SimpleExpenseId, YearMonth};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A one-off payment made by one of the two participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleExpense {
    /// Expense ID.
    pub id: SimpleExpenseId,
    /// What was paid for.
    pub concept: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Who paid.
    pub payer: Person,
    /// Payment date.
    pub date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A purchase paid in monthly installments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentPurchase {
    /// Purchase ID.
    pub id: InstallmentPurchaseId,
    /// What was bought.
    pub concept: String,
    /// Full purchase price.
    pub total_amount: Decimal,
    /// Number of monthly installments.
    pub installment_count: u32,
    /// Amount of each installment, rounded up to a whole unit.
    pub per_installment_amount: Decimal,
    /// Month of the first installment.
    pub start_month: YearMonth,
    /// Reimbursement credited against the earliest installments.
    pub reimbursement: Option<Decimal>,
    /// Who pays the installments.
    pub payer: Person,
    /// Purchase date.
    pub date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// One month's obligation derived from an installment purchase.
///
/// Identified by `(purchase_id, installment_number)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyInstallment {
    /// Parent purchase.
    pub purchase_id: InstallmentPurchaseId,
    /// Concept copied from the purchase.
    pub concept: String,
    /// Month this installment is due.
    pub month: YearMonth,
    /// Position in the schedule, starting at 1.
    pub installment_number: u32,
    /// Installment amount before reimbursement.
    pub original_amount: Decimal,
    /// Portion covered by the reimbursement.
    pub reimbursement_applied: Decimal,
    /// Amount actually owed this month.
    pub payable_amount: Decimal,
    /// Payer copied from the purchase.
    pub payer: Person,
}

/// Input for recording a one-off expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSimpleExpenseInput {
    /// What was paid for.
    pub concept: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Who paid.
    pub payer: Person,
    /// Payment date.
    pub date: NaiveDate,
}

/// Input for recording an installment purchase.
///
/// The per-installment amount is derived, never supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInstallmentPurchaseInput {
    /// What was bought.
    pub concept: String,
    /// Full purchase price.
    pub total_amount: Decimal,
    /// Number of monthly installments.
    pub installment_count: u32,
    /// Month of the first installment.
    pub start_month: YearMonth,
    /// Optional reimbursement.
    #[serde(default)]
    pub reimbursement: Option<Decimal>,
    /// Who pays the installments.
    pub payer: Person,
    /// Purchase date.
    pub date: NaiveDate,
}

/// A validated installment purchase, ready to be appended to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallmentPlan {
    /// What was bought (trimmed).
    pub concept: String,
    /// Full purchase price.
    pub total_amount: Decimal,
    /// Number of monthly installments.
    pub installment_count: u32,
    /// `ceil(total_amount / installment_count)`.
    pub per_installment_amount: Decimal,
    /// Month of the first installment.
    pub start_month: YearMonth,
    /// Reimbursement, `None` when absent or zero.
    pub reimbursement: Option<Decimal>,
    /// Who pays the installments.
    pub payer: Person,
    /// Purchase date.
    pub date: NaiveDate,
}

impl InstallmentPlan {
    /// Attaches the identity assigned by the store.
    #[must_use]
    pub fn into_purchase(
        self,
        id: InstallmentPurchaseId,
        created_at: DateTime<Utc>,
    ) -> InstallmentPurchase {
        InstallmentPurchase {
            id,
            concept: self.concept,
            total_amount: self.total_amount,
            installment_count: self.installment_count,
            per_installment_amount: self.per_installment_amount,
            start_month: self.start_month,
            reimbursement: self.reimbursement,
            payer: self.payer,
            date: self.date,
            created_at,
        }
    }
}

impl CreateSimpleExpenseInput {
    /// Attaches the identity assigned by the store.
    #[must_use]
    pub fn into_expense(self, id: SimpleExpenseId, created_at: DateTime<Utc>) -> SimpleExpense {
        SimpleExpense {
            id,
            concept: self.concept,
            amount: self.amount,
            payer: self.payer,
            date: self.date,
            created_at,
        }
    }
}

/// Expenses that fall in one month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyExpenses {
    /// One-off expenses dated in the month.
    pub simple_expenses: Vec<SimpleExpense>,
    /// Installments due in the month.
    pub monthly_installments: Vec<MonthlyInstallment>,
}
