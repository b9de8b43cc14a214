//! Boundary validation for expense inputs.

use duoledger_shared::types::per_installment_amount;
use rust_decimal::Decimal;

use super::error::ExpenseError;
use super::types::{CreateInstallmentPurchaseInput, CreateSimpleExpenseInput, InstallmentPlan};

/// Largest number of installments a purchase may be split into.
pub const MAX_INSTALLMENTS: u32 = 120;

fn validate_concept(concept: &str) -> Result<String, ExpenseError> {
    let trimmed = concept.trim();
    if trimmed.is_empty() {
        return Err(ExpenseError::EmptyConcept);
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: Decimal) -> Result<(), ExpenseError> {
    if amount < Decimal::ZERO {
        return Err(ExpenseError::NegativeAmount(amount));
    }
    Ok(())
}

impl CreateSimpleExpenseInput {
    /// Validates the input, returning it with a trimmed concept.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::EmptyConcept` or `ExpenseError::NegativeAmount`.
    pub fn validate(self) -> Result<Self, ExpenseError> {
        let concept = validate_concept(&self.concept)?;
        validate_amount(self.amount)?;
        Ok(Self { concept, ..self })
    }
}

impl CreateInstallmentPurchaseInput {
    /// Validates the input and derives the per-installment amount.
    ///
    /// A zero reimbursement is treated as no reimbursement.
    ///
    /// # Errors
    ///
    /// Returns an `ExpenseError` describing the first violated constraint.
    pub fn validate(self) -> Result<InstallmentPlan, ExpenseError> {
        let concept = validate_concept(&self.concept)?;
        validate_amount(self.total_amount)?;

        if !(1..=MAX_INSTALLMENTS).contains(&self.installment_count) {
            return Err(ExpenseError::InvalidInstallmentCount {
                got: self.installment_count,
                max: MAX_INSTALLMENTS,
            });
        }

        if self
            .start_month
            .add_months(self.installment_count - 1)
            .is_none()
        {
            return Err(ExpenseError::ScheduleOutOfRange {
                start_month: self.start_month,
                installment_count: self.installment_count,
            });
        }

        if let Some(reimbursement) = self.reimbursement {
            if reimbursement < Decimal::ZERO {
                return Err(ExpenseError::NegativeReimbursement(reimbursement));
            }
            if reimbursement > self.total_amount {
                return Err(ExpenseError::ReimbursementExceedsTotal {
                    reimbursement,
                    total: self.total_amount,
                });
            }
        }

        Ok(InstallmentPlan {
            concept,
            total_amount: self.total_amount,
            installment_count: self.installment_count,
            per_installment_amount: per_installment_amount(
                self.total_amount,
                self.installment_count,
            ),
            start_month: self.start_month,
            reimbursement: self.reimbursement.filter(|r| !r.is_zero()),
            payer: self.payer,
            date: self.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use duoledger_shared::types::Person;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn installment_input() -> CreateInstallmentPurchaseInput {
        CreateInstallmentPurchaseInput {
            concept: "  Notebook ".to_string(),
            total_amount: dec!(600),
            installment_count: 6,
            start_month: "2024-03".parse().unwrap(),
            reimbursement: Some(dec!(180)),
            payer: Person::Pablo,
            date: date(),
        }
    }

    #[test]
    fn test_simple_expense_trims_concept() {
        let input = CreateSimpleExpenseInput {
            concept: " Supermercado ".to_string(),
            amount: dec!(100),
            payer: Person::Manuel,
            date: date(),
        };
        assert_eq!(input.validate().unwrap().concept, "Supermercado");
    }

    #[test]
    fn test_simple_expense_rejects_blank_concept() {
        let input = CreateSimpleExpenseInput {
            concept: "   ".to_string(),
            amount: dec!(100),
            payer: Person::Manuel,
            date: date(),
        };
        assert_eq!(input.validate(), Err(ExpenseError::EmptyConcept));
    }

    #[test]
    fn test_simple_expense_rejects_negative_amount() {
        let input = CreateSimpleExpenseInput {
            concept: "Cine".to_string(),
            amount: dec!(-1),
            payer: Person::Manuel,
            date: date(),
        };
        assert_eq!(
            input.validate(),
            Err(ExpenseError::NegativeAmount(dec!(-1)))
        );
    }

    #[test]
    fn test_simple_expense_accepts_zero_amount() {
        let input = CreateSimpleExpenseInput {
            concept: "Regalo".to_string(),
            amount: dec!(0),
            payer: Person::Pablo,
            date: date(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_installment_plan_derives_per_installment_amount() {
        let plan = installment_input().validate().unwrap();
        assert_eq!(plan.concept, "Notebook");
        assert_eq!(plan.per_installment_amount, dec!(100));
        assert_eq!(plan.reimbursement, Some(dec!(180)));
    }

    #[test]
    fn test_installment_plan_rounds_up() {
        let plan = CreateInstallmentPurchaseInput {
            total_amount: dec!(1000),
            installment_count: 3,
            reimbursement: None,
            ..installment_input()
        }
        .validate()
        .unwrap();

        assert_eq!(plan.per_installment_amount, dec!(334));
        assert!(plan.per_installment_amount * dec!(3) >= plan.total_amount);
    }

    #[test]
    fn test_installment_count_bounds() {
        let zero = CreateInstallmentPurchaseInput {
            installment_count: 0,
            ..installment_input()
        };
        assert_eq!(
            zero.validate(),
            Err(ExpenseError::InvalidInstallmentCount {
                got: 0,
                max: MAX_INSTALLMENTS
            })
        );

        let too_many = CreateInstallmentPurchaseInput {
            installment_count: MAX_INSTALLMENTS + 1,
            ..installment_input()
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_schedule_must_end_by_last_month() {
        let last_month_only = CreateInstallmentPurchaseInput {
            installment_count: 1,
            start_month: "9999-12".parse().unwrap(),
            ..installment_input()
        };
        assert!(last_month_only.validate().is_ok());

        let overflowing = CreateInstallmentPurchaseInput {
            installment_count: 2,
            start_month: "9999-12".parse().unwrap(),
            ..installment_input()
        };
        assert_eq!(
            overflowing.validate(),
            Err(ExpenseError::ScheduleOutOfRange {
                start_month: "9999-12".parse().unwrap(),
                installment_count: 2,
            })
        );
    }

    #[test]
    fn test_reimbursement_bounds() {
        let negative = CreateInstallmentPurchaseInput {
            reimbursement: Some(dec!(-5)),
            ..installment_input()
        };
        assert_eq!(
            negative.validate(),
            Err(ExpenseError::NegativeReimbursement(dec!(-5)))
        );

        let excessive = CreateInstallmentPurchaseInput {
            reimbursement: Some(dec!(601)),
            ..installment_input()
        };
        assert_eq!(
            excessive.validate(),
            Err(ExpenseError::ReimbursementExceedsTotal {
                reimbursement: dec!(601),
                total: dec!(600)
            })
        );

        let full = CreateInstallmentPurchaseInput {
            reimbursement: Some(dec!(600)),
            ..installment_input()
        };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn test_zero_reimbursement_is_none() {
        let plan = CreateInstallmentPurchaseInput {
            reimbursement: Some(dec!(0)),
            ..installment_input()
        }
        .validate()
        .unwrap();
        assert_eq!(plan.reimbursement, None);
    }
}
