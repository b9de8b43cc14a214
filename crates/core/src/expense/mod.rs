//! One-off expenses and installment purchases.

pub mod error;
pub mod types;
pub mod validation;

pub use error::ExpenseError;
pub use types::{
    CreateInstallmentPurchaseInput, CreateSimpleExpenseInput, InstallmentPlan,
    InstallmentPurchase, MonthlyExpenses, MonthlyInstallment, SimpleExpense,
};
pub use validation::MAX_INSTALLMENTS;
