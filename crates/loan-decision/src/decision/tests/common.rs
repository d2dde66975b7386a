use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::decision::{
    DateSource, DecisionEngine, EstonianPersonalCodeValidator, IdentifierValidator, LoanRequest,
};

pub(super) const DEBTOR_CODE: &str = "37605030299";
pub(super) const SEGMENT1_CODE: &str = "50307172740";
pub(super) const SEGMENT2_CODE: &str = "38411266610";
pub(super) const SEGMENT3_CODE: &str = "35006069515";
pub(super) const TOO_OLD_CODE: &str = "33103236020";
pub(super) const FUTURE_BIRTH_CODE: &str = "67304273199";
pub(super) const UNDERAGE_CODE: &str = "61308269999";

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn engine() -> DecisionEngine<EstonianPersonalCodeValidator, DateSource> {
    DecisionEngine::standard(DateSource::Fixed(today()))
}

pub(super) fn permissive_engine() -> DecisionEngine<AcceptAnything, DateSource> {
    DecisionEngine::new(Arc::new(AcceptAnything), Arc::new(DateSource::Fixed(today())))
}

pub(super) fn request(personal_code: &str, amount: i64, period: i32, country: &str) -> LoanRequest {
    LoanRequest {
        personal_code: personal_code.to_string(),
        loan_amount: amount,
        loan_period: period,
        country_code: country.to_string(),
    }
}

/// Stand-in for a checksum validator that lets malformed codes through.
pub(super) struct AcceptAnything;

impl IdentifierValidator for AcceptAnything {
    fn is_valid(&self, _personal_code: &str) -> bool {
        true
    }
}

pub(super) async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
