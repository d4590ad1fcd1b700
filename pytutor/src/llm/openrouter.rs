//! OpenAI-compatible chat client for the relay (OpenRouter by default).
//!
//! One non-streaming chat completion per call: the rendered tutoring prompt
//! goes in as the system message, the raw student query as the user message,
//! and the first choice's content comes back. Works against any
//! OpenAI-compatible endpoint via custom API base and key.
//!
//! **Interaction**: Implements [`LlmClient`]; built once in `cli` from
//! [`Settings`](../../config) and injected into the serve state. Depends on
//! `async_openai`.

use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, trace};

use super::{LlmClient, LlmError};

/// Default bound on one upstream call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat client over an OpenAI-compatible API (OpenRouter, OpenAI, proxies).
///
/// Single attempt per call, bounded by an explicit timeout so a hung
/// upstream fails the request instead of hanging it.
pub struct OpenRouterChat {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenRouterChat {
    /// Builds a client for `base_url` (e.g. `https://openrouter.ai/api/v1`)
    /// with the given API key and model. A trailing slash on the base is
    /// trimmed; the async-openai client appends the route itself.
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
    ) -> Self {
        let api_key: String = api_key.into();
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url.trim_end_matches('/'));
        Self {
            client: Client::with_config(config),
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Model name this client dispatches to.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenRouterChat {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                system,
            )),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(user)),
        ];

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(messages);
        let request = args
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?;

        debug!(
            model = %self.model,
            system_len = system.len(),
            user_len = user.len(),
            timeout_secs = self.timeout.as_secs(),
            "chat completion dispatch"
        );
        if let Ok(js) = serde_json::to_string(&request) {
            trace!(request = %js, "chat completion request body");
        }

        let chat = self.client.chat();
        let call = chat.create(request);
        let response = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| LlmError::Timeout(self.timeout.as_secs()))?
            .map_err(|e| LlmError::Upstream(e.to_string()))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::NoChoices)?;
        Ok(choice.message.content.unwrap_or_default())
    }
}
