//! HTTP server for the pytutor relay (axum).
//!
//! Two routes: `POST /submit` (validate, registry lookup, prompt render, one
//! upstream chat call) and `GET /` (health). Cross-origin access is limited
//! to POST from the single configured origin.
//!
//! **Public API**: [`AppState`], [`run_serve`], [`run_serve_on_listener`].

mod app;
mod error;
mod health;
mod submit;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

pub use app::AppState;

/// Runs the server on an existing listener. Used by tests (bind to
/// `127.0.0.1:0` first, then pass the listener).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    let app = app::router(state)?;
    info!("relay listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Binds `addr` and serves until the process exits.
pub async fn run_serve(
    addr: &str,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, state).await
}
