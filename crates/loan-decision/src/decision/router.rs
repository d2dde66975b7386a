use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::clock::Clock;
use super::domain::{Decision, LoanRequest};
use super::error::{DecisionError, ErrorClass};
use super::identifier::IdentifierValidator;
use super::DecisionEngine;

/// Router exposing the loan decision endpoint.
pub fn decision_router<V, C>(engine: Arc<DecisionEngine<V, C>>) -> Router
where
    V: IdentifierValidator + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/loan/decision", post(decision_handler::<V, C>))
        .with_state(engine)
}

pub(crate) async fn decision_handler<V, C>(
    State(engine): State<Arc<DecisionEngine<V, C>>>,
    payload: Result<Json<LoanRequest>, JsonRejection>,
) -> Response
where
    V: IdentifierValidator + 'static,
    C: Clock + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let decision = Decision::rejected(rejection.body_text());
            return (StatusCode::BAD_REQUEST, Json(decision)).into_response();
        }
    };

    let outcome = engine.evaluate(&request);
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(err) => status_for(err),
    };

    (status, Json(Decision::from_outcome(&outcome))).into_response()
}

pub fn status_for(err: &DecisionError) -> StatusCode {
    match err.class() {
        ErrorClass::Client => StatusCode::BAD_REQUEST,
        ErrorClass::NotFound => StatusCode::NOT_FOUND,
        ErrorClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
