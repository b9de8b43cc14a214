//! Conversions from database rows to domain values.

use duoledger_core::balance::{PeriodBalance, Settlement};
use duoledger_core::expense::{InstallmentPurchase, MonthlyInstallment, SimpleExpense};
use duoledger_core::store::{StoreError, StoreResult};
use duoledger_shared::types::{
    InstallmentPurchaseId, Person, PersonTotals, SimpleExpenseId, YearMonth,
};
use sea_orm::DbErr;

use crate::entities::{
    installment_purchases, monthly_installments, period_balances, simple_expenses,
};

pub(crate) fn backend(err: DbErr) -> StoreError {
    StoreError::backend(err.to_string())
}

fn person(raw: &str) -> StoreResult<Person> {
    raw.parse().map_err(StoreError::corrupt)
}

fn month(raw: &str) -> StoreResult<YearMonth> {
    raw.trim()
        .parse::<YearMonth>()
        .map_err(|e| StoreError::corrupt(e.to_string()))
}

fn count(raw: i32) -> StoreResult<u32> {
    u32::try_from(raw).map_err(|_| StoreError::corrupt(format!("negative count {raw}")))
}

pub(crate) fn simple_expense(model: simple_expenses::Model) -> StoreResult<SimpleExpense> {
    Ok(SimpleExpense {
        id: SimpleExpenseId::from_uuid(model.id),
        payer: person(&model.payer)?,
        concept: model.concept,
        amount: model.amount,
        date: model.date,
        created_at: model.created_at.to_utc(),
    })
}

pub(crate) fn installment_purchase(
    model: installment_purchases::Model,
) -> StoreResult<InstallmentPurchase> {
    Ok(InstallmentPurchase {
        id: InstallmentPurchaseId::from_uuid(model.id),
        installment_count: count(model.installment_count)?,
        start_month: month(&model.start_month)?,
        payer: person(&model.payer)?,
        concept: model.concept,
        total_amount: model.total_amount,
        per_installment_amount: model.per_installment_amount,
        reimbursement: model.reimbursement,
        date: model.date,
        created_at: model.created_at.to_utc(),
    })
}

pub(crate) fn monthly_installment(
    model: monthly_installments::Model,
) -> StoreResult<MonthlyInstallment> {
    Ok(MonthlyInstallment {
        purchase_id: InstallmentPurchaseId::from_uuid(model.purchase_id),
        installment_number: count(model.installment_number)?,
        month: month(&model.month)?,
        payer: person(&model.payer)?,
        concept: model.concept,
        original_amount: model.original_amount,
        reimbursement_applied: model.reimbursement_applied,
        payable_amount: model.payable_amount,
    })
}

pub(crate) fn period_balance(model: period_balances::Model) -> StoreResult<PeriodBalance> {
    let debtor = model.debtor.as_deref().map(person).transpose()?;

    Ok(PeriodBalance {
        period: month(&model.period)?,
        settlement: Settlement {
            totals: PersonTotals::new(model.total_manuel, model.total_pablo),
            difference: model.difference,
            debtor,
            amount_owed: model.amount_owed,
        },
        simple_totals: PersonTotals::new(model.simple_manuel, model.simple_pablo),
        installment_totals: PersonTotals::new(model.installment_manuel, model.installment_pablo),
    })
}
