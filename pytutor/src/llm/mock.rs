//! Mock LLM for tests.
//!
//! Returns a fixed reply or a fixed error and counts calls, so tests can
//! assert both on the response and on whether the upstream was invoked at
//! all (validation failures must never reach the model).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmClient, LlmError};

/// Mock chat client: fixed reply or fixed error, with a call counter.
///
/// The last received (system, user) pair is kept so tests can assert the
/// rendered prompt reached the client unmodified.
pub struct MockLlm {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_input: Mutex<Option<(String, String)>>,
}

impl MockLlm {
    /// Mock that answers every call with the given text.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// Mock whose every call fails with `LlmError::Upstream(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// Number of `complete` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The (system, user) pair of the most recent call, if any.
    pub fn last_input(&self) -> Option<(String, String)> {
        self.last_input.lock().ok().and_then(|g| g.clone())
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut g) = self.last_input.lock() {
            *g = Some((system.to_string(), user.to_string()));
        }
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(LlmError::Upstream(message.clone())),
        }
    }
}
