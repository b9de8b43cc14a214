//! `SeaORM` entity definitions.

pub mod installment_purchases;
pub mod monthly_installments;
pub mod period_balances;
pub mod simple_expenses;
