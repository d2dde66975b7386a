use std::sync::Arc;

use chrono::NaiveDate;

use super::age::{self, AgeVerdict};
use super::error::DecisionError;
use super::identifier::IdentifierValidator;
use super::policy::{MAX_LOAN_AMOUNT, MAX_LOAN_PERIOD, MIN_LOAN_AMOUNT, MIN_LOAN_PERIOD};

/// Checks a request in precedence order: identifier, age, amount, period.
pub struct InputValidator<V> {
    identifiers: Arc<V>,
}

impl<V> InputValidator<V>
where
    V: IdentifierValidator,
{
    pub fn new(identifiers: Arc<V>) -> Self {
        Self { identifiers }
    }

    pub fn verify(
        &self,
        personal_code: &str,
        loan_amount: i64,
        loan_period: i32,
        country_code: &str,
        today: NaiveDate,
    ) -> Result<(), DecisionError> {
        if !self.identifiers.is_valid(personal_code) {
            return Err(DecisionError::InvalidIdentifier);
        }

        if let AgeVerdict::Rejected(rejection) = age::assess(personal_code, country_code, today)? {
            return Err(DecisionError::InvalidAge(rejection));
        }

        if !amount_in_bounds(loan_amount) {
            return Err(DecisionError::InvalidLoanAmount);
        }

        if !period_in_bounds(loan_period) {
            return Err(DecisionError::InvalidLoanPeriod);
        }

        Ok(())
    }
}

pub fn amount_in_bounds(loan_amount: i64) -> bool {
    (MIN_LOAN_AMOUNT..=MAX_LOAN_AMOUNT).contains(&loan_amount)
}

pub fn period_in_bounds(loan_period: i32) -> bool {
    (MIN_LOAN_PERIOD..=MAX_LOAN_PERIOD).contains(&loan_period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::error::{AgeDerivationError, AgeRejection};
    use crate::decision::identifier::EstonianPersonalCodeValidator;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
    }

    fn validator() -> InputValidator<EstonianPersonalCodeValidator> {
        InputValidator::new(Arc::new(EstonianPersonalCodeValidator))
    }

    #[test]
    fn accepts_request_within_bounds() {
        assert_eq!(
            validator().verify("50307172740", 2000, 60, "EE", today()),
            Ok(())
        );
        assert_eq!(
            validator().verify("50307172740", 10000, 12, "LV", today()),
            Ok(())
        );
    }

    #[test]
    fn identifier_is_checked_first() {
        assert_eq!(
            validator().verify("12345678901", 1, 1, "XX", today()),
            Err(DecisionError::InvalidIdentifier)
        );
    }

    #[test]
    fn age_is_checked_before_amount() {
        assert_eq!(
            validator().verify("61308269999", 1, 1, "EE", today()),
            Err(DecisionError::InvalidAge(AgeRejection::Underage { age: 11 }))
        );
        assert_eq!(
            validator().verify("67304273199", 1, 1, "EE", today()),
            Err(DecisionError::InvalidAgeDerivation(
                AgeDerivationError::FutureBirthDate
            ))
        );
    }

    #[test]
    fn amount_is_checked_before_period() {
        assert_eq!(
            validator().verify("50307172740", 1, 10, "EE", today()),
            Err(DecisionError::InvalidLoanAmount)
        );
        assert_eq!(
            validator().verify("50307172740", MAX_LOAN_AMOUNT + 1, 12, "EE", today()),
            Err(DecisionError::InvalidLoanAmount)
        );
    }

    #[test]
    fn period_bounds_are_inclusive() {
        assert!(period_in_bounds(MIN_LOAN_PERIOD));
        assert!(period_in_bounds(MAX_LOAN_PERIOD));
        assert_eq!(
            validator().verify("50307172740", 4000, MIN_LOAN_PERIOD - 1, "EE", today()),
            Err(DecisionError::InvalidLoanPeriod)
        );
        assert_eq!(
            validator().verify("50307172740", 4000, MAX_LOAN_PERIOD + 1, "EE", today()),
            Err(DecisionError::InvalidLoanPeriod)
        );
    }
}
