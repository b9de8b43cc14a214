//! Balance aggregation over expense sets.

use duoledger_shared::types::{PersonTotals, YearMonth};

use super::types::{BalancesByType, PeriodBalance, Settlement};
use crate::expense::{MonthlyInstallment, SimpleExpense};

/// Computes who owes whom.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Per-person totals of the simple expenses dated in `period`, or of all of
    /// them when `period` is `None`.
    #[must_use]
    pub fn simple_totals(expenses: &[SimpleExpense], period: Option<YearMonth>) -> PersonTotals {
        expenses
            .iter()
            .filter(|e| period.is_none_or(|p| p.contains(e.date)))
            .map(|e| (e.payer, e.amount))
            .collect()
    }

    /// Per-person totals of the payable amounts of installments due in `period`.
    #[must_use]
    pub fn installment_totals(
        installments: &[MonthlyInstallment],
        period: YearMonth,
    ) -> PersonTotals {
        installments
            .iter()
            .filter(|i| i.month == period)
            .map(|i| (i.payer, i.payable_amount))
            .collect()
    }

    /// Unified balance for `period`.
    ///
    /// Both inputs are filtered to the period, so callers may pass broader sets.
    #[must_use]
    pub fn compute_balance(
        period: YearMonth,
        simple_expenses: &[SimpleExpense],
        monthly_installments: &[MonthlyInstallment],
    ) -> PeriodBalance {
        let simple_totals = Self::simple_totals(simple_expenses, Some(period));
        let installment_totals = Self::installment_totals(monthly_installments, period);

        PeriodBalance {
            period,
            settlement: Settlement::from_totals(simple_totals.combined(installment_totals)),
            simple_totals,
            installment_totals,
        }
    }

    /// Balances split by expense type.
    ///
    /// Simple expenses are NOT filtered by period: they form a running tally
    /// over the whole history. Installments are limited to `period`.
    #[must_use]
    pub fn compute_balance_by_type(
        period: YearMonth,
        all_simple_expenses: &[SimpleExpense],
        monthly_installments: &[MonthlyInstallment],
    ) -> BalancesByType {
        BalancesByType {
            period,
            simples: Settlement::from_totals(Self::simple_totals(all_simple_expenses, None)),
            installments: Settlement::from_totals(Self::installment_totals(
                monthly_installments,
                period,
            )),
        }
    }
}
