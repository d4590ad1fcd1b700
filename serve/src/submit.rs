//! `POST /submit`: the one endpoint with externally observable behavior.
//!
//! A single linear pass per request: schema validation (axum's Json
//! extractor), required-field check, registry lookup, template render, one
//! upstream chat call. Two early exits (validation failure, upstream
//! failure) and no background work.
//!
//! The student's query and code are embedded into the outbound prompt
//! verbatim, with no escaping or sanitization. The downstream model is expected
//! to treat them as untrusted student content; prompt injection is inherent
//! at this boundary and not mitigated here.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::app::AppState;
use crate::error::ApiError;

/// Fixed 400 message when a required field is empty.
pub(crate) const MISSING_FIELDS_DETAIL: &str = "All fields are required.";

/// Substituted for `{question_details}` when the id is not in the registry.
/// The request still proceeds (degraded prompt); an unknown id is a content
/// gap, not a caller error.
pub(crate) const ABSENT_QUESTION_PLACEHOLDER: &str =
    "No reference question is on file for this question id.";

/// Request body: all three fields required by schema, all three must be
/// non-empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StudentQuery {
    pub question_id: String,
    pub query: String,
    pub code: String,
}

/// Success body: the id echoed back, the first completion's text unmodified,
/// and a fixed status flag.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmitResponse {
    pub question_id: String,
    pub response: String,
    pub status: &'static str,
}

pub(crate) async fn submit_query(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StudentQuery>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(query) =
        payload.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;

    if query.question_id.is_empty() || query.query.is_empty() || query.code.is_empty() {
        return Err(ApiError::BadRequest(MISSING_FIELDS_DETAIL.to_string()));
    }

    let details = match state.registry.get(&query.question_id) {
        Some(d) => d,
        None => {
            warn!(
                question_id = %query.question_id,
                "question id not in registry, proceeding with placeholder"
            );
            ABSENT_QUESTION_PLACEHOLDER
        }
    };

    let prompt = state.prompt.render(details, &query.query, &query.code);
    debug!(
        question_id = %query.question_id,
        prompt_len = prompt.len(),
        "dispatching student query upstream"
    );
    let answer = state.llm.complete(&prompt, &query.query).await?;

    Ok(Json(SubmitResponse {
        question_id: query.question_id,
        response: answer,
        status: "success",
    }))
}
