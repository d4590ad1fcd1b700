//! Shared helpers for e2e tests: build an [`AppState`] around a mock LLM and
//! spawn the server on a random port.

use std::sync::Arc;

use pytutor::{MockLlm, PromptTemplate, QuestionRegistry};
use serve::AppState;
use tokio::net::TcpListener;

/// Origin the test server allow-lists for CORS.
pub const TEST_ORIGIN: &str = "https://pymebot-frontend.onrender.com";

/// State with one known question (`Q1`) and the given mock client.
pub fn state_with_llm(llm: Arc<MockLlm>) -> Arc<AppState> {
    Arc::new(AppState {
        registry: Arc::new(QuestionRegistry::from_entries([(
            "Q1",
            "Remove words of length K",
        )])),
        prompt: PromptTemplate::default_from_embedded().unwrap(),
        llm,
        allowed_origin: TEST_ORIGIN.to_string(),
    })
}

/// Bind to a random port and spawn the server. Returns (base_url, handle);
/// abort the handle at the end of the test.
pub async fn spawn_server(
    state: Arc<AppState>,
) -> (
    String,
    tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);
    let handle = tokio::spawn(serve::run_serve_on_listener(listener, state));
    (url, handle)
}
