//! Shared LLM client and interaction utilities
//!
//! Wraps the OpenAI Chat Completions API behind a single `complete` call
//! taking role-tagged messages. This is the only suspension point in the
//! core; no parsing happens here.

use std::time::Duration;

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestDeveloperMessage,
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessage, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;

use crate::model::{Config, Message, Role};

/// Rendered to the user when the model returns an empty completion, so
/// every caller has something to show.
pub const EMPTY_COMPLETION_FALLBACK: &str = "エラーが発生しました。もう一度お試しください。";

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request could not be built: {0}")]
    InvalidRequest(String),
    #[error("completion request failed: {0}")]
    Provider(String),
    #[error("completion timed out after {0}s")]
    Timeout(u64),
}

/// Per-call parameter overrides; `None` falls back to the configured
/// default. Presence-based on purpose: a temperature of exactly 0.0 must
/// be honored, so overrides are never treated as falsy values.
#[derive(Debug, Clone, Default)]
pub struct CompletionOverrides {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// Per-request credential. When set, an ephemeral client bound to this
    /// key is used for the call instead of the process-wide default.
    pub api_key: Option<String>,
}

impl CompletionOverrides {
    pub fn with_api_key(api_key: Option<&str>) -> Self {
        Self {
            api_key: api_key.map(str::to_owned),
            ..Self::default()
        }
    }
}

/// Completion backend seam so orchestrators can run against a fake in tests.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete(
        &self,
        messages: &[Message],
        overrides: &CompletionOverrides,
    ) -> Result<String, CompletionError>;
}

#[derive(Debug, Clone)]
struct CompletionDefaults {
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout_secs: u64,
}

/// Process-wide completion client.
///
/// The default credential comes from `OPENAI_API_KEY`; the client is
/// read-only after construction. Per-request keys never touch it.
pub struct CompletionClient {
    client: Client<OpenAIConfig>,
    defaults: CompletionDefaults,
}

impl CompletionClient {
    pub fn new(config: &Config) -> Self {
        tracing::info!(
            model = %config.openai_model,
            timeout_secs = config.openai_timeout_secs,
            "Completion client initialized"
        );

        Self {
            client: Client::new(),
            defaults: CompletionDefaults {
                model: config.openai_model.clone(),
                temperature: config.openai_temperature,
                max_tokens: config.openai_max_tokens,
                timeout_secs: config.openai_timeout_secs,
            },
        }
    }

    fn build_request(
        &self,
        messages: &[Message],
        overrides: &CompletionOverrides,
    ) -> Result<CreateChatCompletionRequest, CompletionError> {
        CreateChatCompletionRequestArgs::default()
            .model(overrides.model.as_deref().unwrap_or(self.defaults.model.as_str()))
            .temperature(overrides.temperature.unwrap_or(self.defaults.temperature))
            .max_completion_tokens(overrides.max_tokens.unwrap_or(self.defaults.max_tokens))
            .messages(to_request_messages(messages))
            .build()
            .map_err(|e| CompletionError::InvalidRequest(e.to_string()))
    }
}

#[async_trait]
impl ChatCompleter for CompletionClient {
    async fn complete(
        &self,
        messages: &[Message],
        overrides: &CompletionOverrides,
    ) -> Result<String, CompletionError> {
        let request = self.build_request(messages, overrides)?;
        let timeout_secs = self.defaults.timeout_secs;
        let started = std::time::Instant::now();

        tracing::debug!(
            model = %request.model,
            message_count = messages.len(),
            per_request_key = overrides.api_key.is_some(),
            "Initiating OpenAI chat completion"
        );

        let call = async {
            match overrides.api_key.as_deref() {
                // Ephemeral client scoped to this call; never cached.
                Some(key) => {
                    let client = Client::with_config(OpenAIConfig::new().with_api_key(key));
                    client.chat().create(request).await
                }
                None => self.client.chat().create(request).await,
            }
        };

        let response = tokio::time::timeout(Duration::from_secs(timeout_secs), call)
            .await
            .map_err(|_| CompletionError::Timeout(timeout_secs))?
            .map_err(|e| {
                tracing::error!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "OpenAI chat completion failed"
                );
                CompletionError::Provider(e.to_string())
            })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| EMPTY_COMPLETION_FALLBACK.to_string());

        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            content_length = content.len(),
            "OpenAI chat completion succeeded"
        );

        Ok(content)
    }
}

fn to_request_messages(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
    messages
        .iter()
        .map(|m| match m.role {
            Role::Developer => ChatCompletionRequestMessage::Developer(
                ChatCompletionRequestDeveloperMessage::from(m.content.as_str()),
            ),
            Role::User => ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessage::from(m.content.as_str()),
            ),
            Role::Assistant => ChatCompletionRequestMessage::Assistant(
                ChatCompletionRequestAssistantMessage::from(m.content.as_str()),
            ),
        })
        .collect()
}
