//! The two people sharing the ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the two fixed ledger participants.
///
/// `Manuel` is the first identity in every balance: differences are always
/// computed as Manuel's total minus Pablo's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Person {
    /// First participant.
    Manuel,
    /// Second participant.
    Pablo,
}

impl Person {
    /// Both participants in balance order.
    pub const ALL: [Self; 2] = [Self::Manuel, Self::Pablo];

    /// Returns the persisted text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manuel => "Manuel",
            Self::Pablo => "Pablo",
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Person {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|person| person.as_str() == s)
            .ok_or_else(|| format!("Unknown person: {s}"))
    }
}

/// Per-person decimal totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTotals {
    /// Manuel's total.
    pub manuel: Decimal,
    /// Pablo's total.
    pub pablo: Decimal,
}

impl PersonTotals {
    /// Creates totals from explicit values.
    #[must_use]
    pub const fn new(manuel: Decimal, pablo: Decimal) -> Self {
        Self { manuel, pablo }
    }

    /// Returns the total for `person`.
    #[must_use]
    pub const fn get(&self, person: Person) -> Decimal {
        match person {
            Person::Manuel => self.manuel,
            Person::Pablo => self.pablo,
        }
    }

    /// Adds `amount` to `person`'s total.
    pub fn add(&mut self, person: Person, amount: Decimal) {
        match person {
            Person::Manuel => self.manuel += amount,
            Person::Pablo => self.pablo += amount,
        }
    }

    /// Adds two sets of totals person by person.
    #[must_use]
    pub fn combined(self, other: Self) -> Self {
        Self {
            manuel: self.manuel + other.manuel,
            pablo: self.pablo + other.pablo,
        }
    }
}

impl FromIterator<(Person, Decimal)> for PersonTotals {
    fn from_iter<I: IntoIterator<Item = (Person, Decimal)>>(iter: I) -> Self {
        let mut totals = Self::default();
        for (person, amount) in iter {
            totals.add(person, amount);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_person_display_and_parse() {
        for person in Person::ALL {
            assert_eq!(Person::from_str(&person.to_string()).unwrap(), person);
        }
        assert!(Person::from_str("manuel").is_err());
        assert!(Person::from_str("").is_err());
    }

    #[test]
    fn test_person_serde_matches_persisted_form() {
        assert_eq!(serde_json::to_string(&Person::Pablo).unwrap(), "\"Pablo\"");
        let parsed: Person = serde_json::from_str("\"Manuel\"").unwrap();
        assert_eq!(parsed, Person::Manuel);
        assert!(serde_json::from_str::<Person>("\"Someone\"").is_err());
    }

    #[test]
    fn test_totals_from_iter() {
        let totals: PersonTotals = [
            (Person::Manuel, dec!(100)),
            (Person::Pablo, dec!(40)),
            (Person::Manuel, dec!(50)),
        ]
        .into_iter()
        .collect();

        assert_eq!(totals.get(Person::Manuel), dec!(150));
        assert_eq!(totals.get(Person::Pablo), dec!(40));
    }

    #[test]
    fn test_totals_combined() {
        let a = PersonTotals::new(dec!(10), dec!(20));
        let b = PersonTotals::new(dec!(1), dec!(2));
        assert_eq!(a.combined(b), PersonTotals::new(dec!(11), dec!(22)));
    }
}
