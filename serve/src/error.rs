//! Error → HTTP response mapping for the relay.
//!
//! All handler failures funnel through [`ApiError`]; the body is always
//! `{"detail": "..."}` so the frontend has one error shape to parse.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use pytutor::LlmError;

/// Normalized error payload: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub detail: String,
}

/// One request's failure, mapped to a status code at the handler boundary.
#[derive(Debug)]
pub(crate) enum ApiError {
    /// A required field is missing or empty.
    BadRequest(String),
    /// The body failed schema validation (malformed JSON, wrong types,
    /// missing fields).
    Unprocessable(String),
    /// The upstream call failed; kind decides 502 (upstream unavailable)
    /// vs 500 (local request build / response shape).
    Llm(LlmError),
}

impl From<LlmError> for ApiError {
    fn from(e: LlmError) -> Self {
        ApiError::Llm(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Unprocessable(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid input data: {detail}"),
            ),
            ApiError::Llm(e) if e.is_upstream() => {
                (StatusCode::BAD_GATEWAY, format!("An error occurred: {e}"))
            }
            ApiError::Llm(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred: {e}"),
            ),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
