//! Ledger service: the single entry point for recording expenses and
//! computing balances over a `LedgerStore`.

pub mod error;
pub mod service;


pub use error::LedgerError;
pub use service::{LedgerResult, LedgerService};
