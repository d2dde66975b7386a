/// Message returned to callers for failures that should never reach them in detail.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Why an otherwise well-formed applicant cannot borrow because of their age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRejection {
    Underage { age: u32 },
    ExceedsLifeExpectancyHorizon { age: u32 },
    UnsupportedCountry,
}

/// Failure to derive a birth date from a personal code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeDerivationError {
    #[error("Birthdate is in the future")]
    FutureBirthDate,
    #[error("unrecognized century digit '{0}'")]
    UnknownCentury(char),
    #[error("birth date {year:04}-{month:02}-{day:02} does not exist")]
    ImpossibleDate { year: i32, month: u32, day: u32 },
    #[error("personal code does not start with seven digits")]
    Malformed,
}

/// Every way a loan request can fail to produce an approved loan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("Invalid personal ID code!")]
    InvalidIdentifier,
    #[error("Age is not valid to apply for a loan!")]
    InvalidAge(AgeRejection),
    #[error("Invalid loan amount!")]
    InvalidLoanAmount,
    #[error("Invalid loan period!")]
    InvalidLoanPeriod,
    #[error("No valid loan found!")]
    NoValidLoan,
    #[error(transparent)]
    InvalidAgeDerivation(#[from] AgeDerivationError),
}

/// Transport-independent grouping used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Client,
    NotFound,
    Internal,
}

impl DecisionError {
    pub fn class(&self) -> ErrorClass {
        match self {
            DecisionError::InvalidIdentifier
            | DecisionError::InvalidAge(_)
            | DecisionError::InvalidLoanAmount
            | DecisionError::InvalidLoanPeriod
            | DecisionError::InvalidAgeDerivation(AgeDerivationError::FutureBirthDate) => {
                ErrorClass::Client
            }
            DecisionError::NoValidLoan => ErrorClass::NotFound,
            DecisionError::InvalidAgeDerivation(_) => ErrorClass::Internal,
        }
    }

    /// Text safe to hand back to the applicant.
    pub fn public_message(&self) -> String {
        match self.class() {
            ErrorClass::Internal => UNEXPECTED_ERROR_MESSAGE.to_string(),
            ErrorClass::Client | ErrorClass::NotFound => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn future_birth_date_is_a_client_error() {
        let err = DecisionError::from(AgeDerivationError::FutureBirthDate);
        assert_eq!(err.class(), ErrorClass::Client);
        assert_eq!(err.public_message(), "Birthdate is in the future");
    }

    #[test]
    fn derivation_gaps_hide_their_detail() {
        let err = DecisionError::from(AgeDerivationError::UnknownCentury('9'));
        assert_eq!(err.class(), ErrorClass::Internal);
        assert_eq!(err.public_message(), UNEXPECTED_ERROR_MESSAGE);
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn age_rejections_share_one_message() {
        for rejection in [
            AgeRejection::Underage { age: 16 },
            AgeRejection::ExceedsLifeExpectancyHorizon { age: 80 },
            AgeRejection::UnsupportedCountry,
        ] {
            assert_eq!(
                DecisionError::InvalidAge(rejection).public_message(),
                "Age is not valid to apply for a loan!"
            );
        }
    }

    #[test]
    fn no_valid_loan_maps_to_not_found() {
        assert_eq!(DecisionError::NoValidLoan.class(), ErrorClass::NotFound);
        assert_eq!(
            DecisionError::NoValidLoan.public_message(),
            "No valid loan found!"
        );
    }
}
