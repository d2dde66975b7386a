//! Loan decisioning: input validation, age eligibility, credit segmentation and the
//! amount search, composed by [`DecisionEngine`].

pub mod age;
mod clock;
pub mod credit;
pub mod domain;
pub mod error;
pub mod identifier;
pub mod policy;
pub mod router;
pub mod search;
pub mod validation;

#[cfg(test)]
mod tests;

pub use clock::{Clock, DateSource};
pub use domain::{ApprovedLoan, CountryCode, CreditModifier, Decision, LoanRequest};
pub use error::{AgeDerivationError, AgeRejection, DecisionError, ErrorClass};
pub use identifier::{EstonianPersonalCodeValidator, IdentifierValidator};
pub use router::decision_router;
pub use validation::InputValidator;

use std::sync::Arc;

use tracing::{debug, info, warn};

/// Stateless engine turning a loan request into an approved loan or a typed rejection.
pub struct DecisionEngine<V, C> {
    validator: InputValidator<V>,
    clock: Arc<C>,
}

impl DecisionEngine<EstonianPersonalCodeValidator, DateSource> {
    pub fn standard(date_source: DateSource) -> Self {
        Self::new(
            Arc::new(EstonianPersonalCodeValidator),
            Arc::new(date_source),
        )
    }
}

impl<V, C> DecisionEngine<V, C>
where
    V: IdentifierValidator + 'static,
    C: Clock + 'static,
{
    pub fn new(identifiers: Arc<V>, clock: Arc<C>) -> Self {
        Self {
            validator: InputValidator::new(identifiers),
            clock,
        }
    }

    /// Largest loan the applicant qualifies for, or the first reason they do not.
    pub fn calculate_approved_loan(
        &self,
        personal_code: &str,
        loan_amount: i64,
        loan_period: i32,
        country_code: &str,
    ) -> Result<ApprovedLoan, DecisionError> {
        let today = self.clock.today();

        if let Err(err) =
            self.validator
                .verify(personal_code, loan_amount, loan_period, country_code, today)
        {
            match err.class() {
                ErrorClass::Internal => warn!(%today, error = %err, "age derivation failed"),
                _ => debug!(%today, country_code, reason = %err, "loan request rejected"),
            }
            return Err(err);
        }

        let modifier = credit::resolve(personal_code);
        let loan = match search::find_approval(modifier, loan_amount, loan_period) {
            Ok(loan) => loan,
            Err(err) => {
                info!(country_code, modifier = modifier.0, "no valid loan for applicant");
                return Err(err);
            }
        };

        info!(
            country_code,
            requested_amount = loan_amount,
            requested_period = loan_period,
            approved_amount = loan.amount,
            approved_period = loan.period,
            "loan approved"
        );

        Ok(loan)
    }

    pub fn evaluate(&self, request: &LoanRequest) -> Result<ApprovedLoan, DecisionError> {
        self.calculate_approved_loan(
            &request.personal_code,
            request.loan_amount,
            request.loan_period,
            &request.country_code,
        )
    }

    /// Same as [`evaluate`](Self::evaluate), folded into the wire representation.
    pub fn decide(&self, request: &LoanRequest) -> Decision {
        Decision::from_outcome(&self.evaluate(request))
    }
}
