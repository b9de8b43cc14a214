//! Property-based tests for installment schedule generation.

use chrono::{NaiveDate, Utc};
use duoledger_shared::types::{InstallmentPurchaseId, Person, YearMonth, per_installment_amount};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::AmortizationEngine;
use crate::expense::InstallmentPurchase;

/// Strategy for a purchase total between 0.00 and 1,000,000.00.
fn total_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a start month between 2000-01 and 2099-12.
fn start_month() -> impl Strategy<Value = YearMonth> {
    (2000i32..2100, 1u32..=12).prop_map(|(year, month)| YearMonth::new(year, month).unwrap())
}

/// Builds a purchase the way the creation boundary does.
fn make_purchase(
    total: Decimal,
    count: u32,
    start: YearMonth,
    reimbursement: Option<Decimal>,
) -> InstallmentPurchase {
    InstallmentPurchase {
        id: InstallmentPurchaseId::from_uuid(uuid::Uuid::nil()),
        concept: "Purchase".to_string(),
        total_amount: total,
        installment_count: count,
        per_installment_amount: per_installment_amount(total, count),
        start_month: start,
        reimbursement,
        payer: Person::Manuel,
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        created_at: Utc::now(),
    }
}

/// Strategy for a purchase with a reimbursement of at most twice the total.
fn purchase_strategy() -> impl Strategy<Value = InstallmentPurchase> {
    (total_amount(), 1u32..=60, start_month(), 0u32..=200, any::<bool>()).prop_map(
        |(total, count, start, percent, has_reimbursement)| {
            let reimbursement = has_reimbursement
                .then(|| (total * Decimal::from(percent) / Decimal::ONE_HUNDRED).round_dp(2));
            make_purchase(total, count, start, reimbursement)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Payable plus applied reimbursement always equals the original amounts.
    #[test]
    fn prop_amounts_are_conserved(purchase in purchase_strategy()) {
        let schedule = AmortizationEngine::expand(&purchase).unwrap();

        let payable: Decimal = schedule.iter().map(|i| i.payable_amount).sum();
        let applied: Decimal = schedule.iter().map(|i| i.reimbursement_applied).sum();
        let original: Decimal = schedule.iter().map(|i| i.original_amount).sum();

        prop_assert_eq!(payable + applied, original);
        for installment in &schedule {
            prop_assert!(installment.payable_amount >= Decimal::ZERO);
            prop_assert!(installment.reimbursement_applied >= Decimal::ZERO);
            prop_assert_eq!(
                installment.payable_amount,
                installment.original_amount - installment.reimbursement_applied
            );
        }
    }

    /// Applied reimbursement never increases along the schedule.
    #[test]
    fn prop_reimbursement_is_front_loaded(purchase in purchase_strategy()) {
        let schedule = AmortizationEngine::expand(&purchase).unwrap();

        for pair in schedule.windows(2) {
            prop_assert!(pair[0].reimbursement_applied >= pair[1].reimbursement_applied);
            if pair[0].reimbursement_applied < pair[0].original_amount {
                prop_assert!(pair[1].reimbursement_applied.is_zero());
            }
        }
    }

    /// The schedule absorbs exactly min(reimbursement, schedule capacity).
    #[test]
    fn prop_applied_total_is_capped(purchase in purchase_strategy()) {
        let schedule = AmortizationEngine::expand(&purchase).unwrap();

        let applied: Decimal = schedule.iter().map(|i| i.reimbursement_applied).sum();
        let capacity =
            purchase.per_installment_amount * Decimal::from(purchase.installment_count);
        let credit = purchase.reimbursement.unwrap_or(Decimal::ZERO);

        prop_assert_eq!(applied, credit.min(capacity));
        prop_assert_eq!(
            AmortizationEngine::unabsorbed_reimbursement(&purchase),
            credit - applied
        );
    }

    /// One installment per month starting at the start month.
    #[test]
    fn prop_months_are_consecutive(purchase in purchase_strategy()) {
        let schedule = AmortizationEngine::expand(&purchase).unwrap();

        prop_assert_eq!(schedule.len(), purchase.installment_count as usize);
        prop_assert_eq!(schedule[0].month, purchase.start_month);
        for (offset, installment) in schedule.iter().enumerate() {
            prop_assert_eq!(installment.installment_number as usize, offset + 1);
            prop_assert_eq!(
                Some(installment.month),
                purchase.start_month.add_months(installment.installment_number - 1)
            );
        }
        for pair in schedule.windows(2) {
            prop_assert_eq!(pair[0].month.add_months(1), Some(pair[1].month));
        }
    }

    /// Rounded-up installments always cover the purchase total.
    #[test]
    fn prop_schedule_covers_total(total in total_amount(), count in 1u32..=120) {
        let purchase = make_purchase(total, count, YearMonth::new(2024, 1).unwrap(), None);
        let schedule = AmortizationEngine::expand(&purchase).unwrap();

        let original: Decimal = schedule.iter().map(|i| i.original_amount).sum();
        prop_assert!(original >= total);
        prop_assert!(original - total < Decimal::from(count));
    }
}
