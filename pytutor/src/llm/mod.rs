//! LLM client abstraction for the relay's one upstream call.
//!
//! The request handler depends on a callable that takes the rendered system
//! prompt plus the raw student query and returns the model's reply text;
//! this module defines the trait, the real OpenAI-compatible implementation
//! ([`OpenRouterChat`]) and a mock ([`MockLlm`]).
//!
//! One call per request, single attempt, no retry. The call is bounded by an
//! explicit timeout so a hung upstream fails the request instead of hanging
//! it indefinitely; timeout and transport failures surface as distinct
//! [`LlmError`] kinds so the HTTP layer can map them to an upstream error
//! rather than a generic internal one.

mod mock;
mod openrouter;

pub use mock::MockLlm;
pub use openrouter::OpenRouterChat;

use async_trait::async_trait;
use thiserror::Error;

/// Error from one chat-completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The request could not be built (invalid parameters).
    #[error("chat request build failed: {0}")]
    Request(String),
    /// The upstream call failed (transport, auth, rate limit, API error).
    #[error("upstream error: {0}")]
    Upstream(String),
    /// The upstream did not answer within the configured timeout.
    #[error("upstream timed out after {0}s")]
    Timeout(u64),
    /// The upstream answered with an empty candidate list.
    #[error("upstream returned no choices")]
    NoChoices,
}

impl LlmError {
    /// True for failures of the upstream itself (transport, API error,
    /// timeout) as opposed to local request-building or response-shape
    /// problems. The serve crate maps these to 502.
    pub fn is_upstream(&self) -> bool {
        matches!(self, LlmError::Upstream(_) | LlmError::Timeout(_))
    }
}

/// Chat client: given a system prompt and a user message, returns the first
/// completion's text.
///
/// Implementations: [`OpenRouterChat`] (real API), [`MockLlm`] (tests).
/// The handler consumes only the first candidate; anything beyond that is
/// upstream behavior this relay does not interpret.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// One chat completion: system + user message in, assistant text out.
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}
