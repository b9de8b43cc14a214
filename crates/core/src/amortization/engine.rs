//! Installment schedule generation.

use rust_decimal::Decimal;

use crate::expense::{ExpenseError, InstallmentPurchase, MonthlyInstallment};

/// Expands installment purchases into monthly installments.
pub struct AmortizationEngine;

impl AmortizationEngine {
    /// Expands `purchase` into one installment per month, in order.
    ///
    /// Installment `i` (1-indexed) falls on `start_month + (i - 1)`. The
    /// reimbursement is consumed greedily from the first installment onwards:
    /// each installment absorbs as much of the remaining credit as its original
    /// amount allows. Credit left over after the last installment is dropped.
    ///
    /// Pure and deterministic: the same purchase always yields the same schedule.
    ///
    /// # Example
    ///
    /// 600 over 6 installments with a 180 reimbursement pays
    /// `0, 20, 100, 100, 100, 100`.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::ScheduleOutOfRange` if an installment would fall
    /// after `9999-12`.
    pub fn expand(
        purchase: &InstallmentPurchase,
    ) -> Result<Vec<MonthlyInstallment>, ExpenseError> {
        let original = purchase.per_installment_amount;
        let credit = purchase.reimbursement.unwrap_or(Decimal::ZERO);

        (1..=purchase.installment_count)
            .scan(credit, |remaining, installment_number| {
                let applied = (*remaining).min(original).max(Decimal::ZERO);
                *remaining -= applied;

                let installment = purchase
                    .start_month
                    .add_months(installment_number - 1)
                    .map(|month| MonthlyInstallment {
                        purchase_id: purchase.id,
                        concept: purchase.concept.clone(),
                        month,
                        installment_number,
                        original_amount: original,
                        reimbursement_applied: applied,
                        payable_amount: original - applied,
                        payer: purchase.payer,
                    });
                Some(installment)
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(ExpenseError::ScheduleOutOfRange {
                start_month: purchase.start_month,
                installment_count: purchase.installment_count,
            })
    }

    /// Returns the reimbursement the schedule could not absorb.
    ///
    /// Non-zero only when the reimbursement exceeds
    /// `per_installment_amount * installment_count`.
    #[must_use]
    pub fn unabsorbed_reimbursement(purchase: &InstallmentPurchase) -> Decimal {
        let capacity = purchase.per_installment_amount * Decimal::from(purchase.installment_count);
        let credit = purchase.reimbursement.unwrap_or(Decimal::ZERO);
        (credit - capacity).max(Decimal::ZERO)
    }
}
