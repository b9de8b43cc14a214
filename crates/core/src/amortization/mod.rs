//! Installment amortization.
//!
//! Turns an installment purchase into its monthly schedule, applying any
//! reimbursement against the earliest installments first.

pub mod engine;

#[cfg(test)]
mod props;

pub use engine::AmortizationEngine;
