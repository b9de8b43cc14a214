//! Common types used across the application.

pub mod id;
pub mod money;
pub mod month;
pub mod person;

pub use id::*;
pub use money::per_installment_amount;
pub use month::{YearMonth, YearMonthError};
pub use person::{Person, PersonTotals};
