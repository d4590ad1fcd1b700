//! `GET /`: liveness probe. Always succeeds, regardless of registry or
//! upstream state.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub(crate) async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Backend is running.",
    })
}
