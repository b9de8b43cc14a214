//! `LedgerStore` implementations.

mod mapping;
mod memory;
mod postgres;

pub use memory::InMemoryLedgerStore;
pub use postgres::PgLedgerStore;
