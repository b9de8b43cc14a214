//! Balance computation between the two participants.

pub mod calculator;
pub mod types;


pub use calculator::BalanceCalculator;
pub use types::{BalancesByType, PeriodBalance, Settlement};
