//! Core business logic for Duoledger.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached only through the [`store::LedgerStore`] port.
//!
//! # Modules
//!
//! - `expense` - Expense types and boundary validation
//! - `amortization` - Installment schedule expansion with reimbursement
//! - `balance` - Settlement between the two participants
//! - `store` - Record store port
//! - `ledger` - Service orchestrating the above

pub mod amortization;
pub mod balance;
pub mod expense;
pub mod ledger;
pub mod store;
