pub mod openai_client;

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};

pub use openai_client::OpenAiChatClient;

/// A single chat round trip: optional system instruction plus one user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub system_prompt: Option<String>,
    pub user_message: String,
}

impl ChatRequest {
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            system_prompt: None,
            user_message: user_message.into(),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }
}

/// Chat capability supplied by a provider adapter.
///
/// Implementations own authentication, model selection and transport. Any failure
/// to obtain a reply is reported as [`AppError::TransportError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn chat(&self, request: ChatRequest) -> AppResult<String>;
}

/// Run one chat call under an optional deadline. Expiry is a transport failure.
pub async fn chat_with_deadline(
    client: &dyn LlmClient,
    request: ChatRequest,
    deadline: Option<Duration>,
) -> AppResult<String> {
    match deadline {
        Some(limit) => tokio::time::timeout(limit, client.chat(request))
            .await
            .map_err(|_| {
                AppError::TransportError(format!(
                    "LLM call timed out after {} ms",
                    limit.as_millis()
                ))
            })?,
        None => client.chat(request).await,
    }
}

/// First `max_chars` characters of `text`, for log lines.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
