use chrono::NaiveDate;

use super::domain::CountryCode;
use super::error::{AgeDerivationError, AgeRejection};
use super::identifier::parse_birth_date;
use super::policy::{life_expectancy, MAX_LOAN_PERIOD_YEARS, MINIMUM_APPLICANT_AGE};

/// Result of checking an applicant's age against the lending rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeVerdict {
    Eligible { age: u32 },
    Rejected(AgeRejection),
}

impl AgeVerdict {
    pub fn is_eligible(&self) -> bool {
        matches!(self, AgeVerdict::Eligible { .. })
    }
}

/// Whole completed years between `birth_date` and `today`.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> Result<u32, AgeDerivationError> {
    today
        .years_since(birth_date)
        .ok_or(AgeDerivationError::FutureBirthDate)
}

/// Oldest age (exclusive) at which a loan can still be issued in `country`.
pub fn age_ceiling(country: CountryCode) -> u32 {
    life_expectancy(country).saturating_sub(MAX_LOAN_PERIOD_YEARS)
}

pub fn assess(
    personal_code: &str,
    country_code: &str,
    today: NaiveDate,
) -> Result<AgeVerdict, AgeDerivationError> {
    let birth_date = parse_birth_date(personal_code)?;
    let age = age_in_years(birth_date, today)?;

    if age < MINIMUM_APPLICANT_AGE {
        return Ok(AgeVerdict::Rejected(AgeRejection::Underage { age }));
    }

    let Some(country) = CountryCode::from_code(country_code) else {
        return Ok(AgeVerdict::Rejected(AgeRejection::UnsupportedCountry));
    };

    if age_ceiling(country) > age {
        Ok(AgeVerdict::Eligible { age })
    } else {
        Ok(AgeVerdict::Rejected(
            AgeRejection::ExceedsLifeExpectancyHorizon { age },
        ))
    }
}

pub fn is_eligible(
    personal_code: &str,
    country_code: &str,
    today: NaiveDate,
) -> Result<bool, AgeDerivationError> {
    assess(personal_code, country_code, today).map(|verdict| verdict.is_eligible())
}
