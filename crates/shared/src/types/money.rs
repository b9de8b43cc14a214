//! Money helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` everywhere; installment amounts are
//! rounded to whole currency units.

use rust_decimal::Decimal;

/// Splits `total` into `count` equal installments, rounding each one up to the
/// nearest whole currency unit.
///
/// The result times `count` is always at least `total`. A `count` of zero
/// yields the total unchanged.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use duoledger_shared::types::per_installment_amount;
///
/// assert_eq!(per_installment_amount(dec!(600), 6), dec!(100));
/// assert_eq!(per_installment_amount(dec!(1000), 3), dec!(334));
/// ```
#[must_use]
pub fn per_installment_amount(total: Decimal, count: u32) -> Decimal {
    if count == 0 {
        return total.ceil();
    }
    (total / Decimal::from(count)).ceil()
}
