//! Axum app: shared state and router.
//!
//! State is built by the caller (cli or tests) and injected: registry,
//! prompt template and LLM client are explicit dependencies, not globals,
//! so tests construct an [`AppState`] with a mock client directly.

use std::sync::Arc;

use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use pytutor::{LlmClient, PromptTemplate, QuestionRegistry};

use super::{health, submit};

/// Shared state for the relay: everything one request needs, read-only.
pub struct AppState {
    /// Question id → reference question text, loaded once at startup.
    pub registry: Arc<QuestionRegistry>,
    /// Tutoring system prompt template.
    pub prompt: PromptTemplate,
    /// Upstream chat client (real or mock).
    pub llm: Arc<dyn LlmClient>,
    /// Single origin allowed to POST cross-origin.
    pub allowed_origin: String,
}

/// Builds the router: `POST /submit`, `GET /`, CORS limited to POST from
/// the allow-listed origin. Fails when the configured origin is not a valid
/// header value.
pub(crate) fn router(state: Arc<AppState>) -> Result<Router, InvalidHeaderValue> {
    let origin: HeaderValue = state.allowed_origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST])
        .allow_headers(Any);

    Ok(Router::new()
        .route("/", get(health::health_check))
        .route("/submit", post(submit::submit_query))
        .layer(cors)
        .with_state(state))
}
