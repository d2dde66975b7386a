use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DecisionError;

/// Countries the lender operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCode {
    Estonia,
    Latvia,
    Lithuania,
}

impl CountryCode {
    /// Parses the two-letter code. Matching is exact: `ee` is not Estonia.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EE" => Some(Self::Estonia),
            "LV" => Some(Self::Latvia),
            "LT" => Some(Self::Lithuania),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Estonia => "EE",
            Self::Latvia => "LV",
            Self::Lithuania => "LT",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-month credit-worthiness coefficient. Zero marks a debtor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CreditModifier(pub u32);

impl CreditModifier {
    pub const DEBTOR: Self = Self(0);

    pub fn is_debtor(&self) -> bool {
        self.0 == 0
    }

    /// Largest amount this modifier supports over `period` months.
    pub fn max_amount(&self, period: i32) -> i64 {
        i64::from(self.0) * i64::from(period)
    }
}

/// Inbound request as received from the HTTP or CLI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i32,
    pub country_code: String,
}

/// Successful outcome of the amount search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovedLoan {
    pub amount: i64,
    pub period: i32,
}

/// Wire view of a decision. Either both loan fields or the error message is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    loan_amount: Option<i64>,
    loan_period: Option<i32>,
    error_message: Option<String>,
}

impl Decision {
    pub fn approved(loan: ApprovedLoan) -> Self {
        Self {
            loan_amount: Some(loan.amount),
            loan_period: Some(loan.period),
            error_message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            loan_amount: None,
            loan_period: None,
            error_message: Some(message.into()),
        }
    }

    pub fn from_outcome(outcome: &Result<ApprovedLoan, DecisionError>) -> Self {
        match outcome {
            Ok(loan) => Self::approved(*loan),
            Err(err) => Self::rejected(err.public_message()),
        }
    }

    pub fn loan_amount(&self) -> Option<i64> {
        self.loan_amount
    }

    pub fn loan_period(&self) -> Option<i32> {
        self.loan_period
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_approved(&self) -> bool {
        self.error_message.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn country_codes_are_case_sensitive() {
        assert_eq!(CountryCode::from_code("LV"), Some(CountryCode::Latvia));
        assert_eq!(CountryCode::from_code("lv"), None);
        assert_eq!(CountryCode::from_code("FI"), None);
    }

    #[test]
    fn approved_decision_serializes_null_error() {
        let decision = Decision::approved(ApprovedLoan {
            amount: 3600,
            period: 12,
        });
        let value = serde_json::to_value(&decision).expect("decision serializes");
        assert_eq!(
            value,
            json!({ "loanAmount": 3600, "loanPeriod": 12, "errorMessage": null })
        );
    }

    #[test]
    fn rejected_decision_carries_only_message() {
        let decision = Decision::from_outcome(&Err(DecisionError::InvalidLoanPeriod));
        assert!(!decision.is_approved());
        assert_eq!(decision.loan_amount(), None);
        assert_eq!(decision.loan_period(), None);
        assert_eq!(decision.error_message(), Some("Invalid loan period!"));
    }

    #[test]
    fn loan_request_uses_camel_case_fields() {
        let request: LoanRequest = serde_json::from_value(json!({
            "personalCode": "50307172740",
            "loanAmount": 4000,
            "loanPeriod": 12,
            "countryCode": "EE"
        }))
        .expect("request parses");
        assert_eq!(request.loan_amount, 4000);
        assert_eq!(request.country_code, "EE");
    }
}
