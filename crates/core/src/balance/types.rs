//! Balance data types.

use duoledger_shared::types::{Person, PersonTotals, YearMonth};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Who owes whom, given what each participant paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Amount paid by each participant.
    pub totals: PersonTotals,
    /// Manuel's total minus Pablo's total.
    pub difference: Decimal,
    /// Participant who paid less, if any.
    pub debtor: Option<Person>,
    /// Amount the debtor owes (absolute difference).
    pub amount_owed: Decimal,
}

impl Settlement {
    /// Settles the given totals.
    ///
    /// The participant who paid less owes the full absolute difference.
    #[must_use]
    pub fn from_totals(totals: PersonTotals) -> Self {
        let difference = totals.manuel - totals.pablo;

        let debtor = match difference.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Some(Person::Pablo),
            std::cmp::Ordering::Less => Some(Person::Manuel),
            std::cmp::Ordering::Equal => None,
        };

        Self {
            totals,
            difference,
            debtor,
            amount_owed: difference.abs(),
        }
    }
}

/// Combined balance for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBalance {
    /// Month the balance covers.
    pub period: YearMonth,
    /// Settlement over simple expenses and installments together.
    #[serde(flatten)]
    pub settlement: Settlement,
    /// Simple-expense contribution per participant.
    pub simple_totals: PersonTotals,
    /// Installment contribution per participant.
    pub installment_totals: PersonTotals,
}

/// Balances kept apart by expense type.
///
/// `simples` covers the whole simple-expense history while `installments`
/// covers only installments due in `period`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancesByType {
    /// Month the installment balance covers.
    pub period: YearMonth,
    /// Running balance of all simple expenses to date.
    pub simples: Settlement,
    /// Balance of installments due in the period.
    pub installments: Settlement,
}
