//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod balance;
pub mod expense;

pub use balance::BalanceRepository;
pub use expense::ExpenseRepository;
