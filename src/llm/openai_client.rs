use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{preview, ChatRequest, LlmClient};
use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

#[derive(Debug, Deserialize)]
struct ChatCompletionBody {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

/// Adapter for any OpenAI compatible chat-completions endpoint (Gemini by default).
pub struct OpenAiChatClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.llm_api_key.expose_secret())
            .with_api_base(config.llm_api_base.clone());

        log::info!(
            "OpenAiChatClient initialized (model: {}, base: {})",
            config.llm_model,
            config.llm_api_base
        );

        Self {
            client: Client::with_config(openai_config),
            model: config.llm_model.clone(),
        }
    }

    fn request_body(&self, request: &ChatRequest) -> Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(system_prompt) = &request.system_prompt {
            messages.push(json!({ "role": "system", "content": system_prompt }));
        }
        messages.push(json!({ "role": "user", "content": request.user_message }));

        json!({
            "model": self.model,
            "messages": messages,
        })
    }
}

fn first_choice_text(body: ChatCompletionBody) -> AppResult<String> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::TransportError("completion contained no message content".to_string()))
}

#[async_trait]
impl LlmClient for OpenAiChatClient {
    async fn chat(&self, request: ChatRequest) -> AppResult<String> {
        log::info!("[REQUEST] {}", preview(&request.user_message, 100));

        let body: ChatCompletionBody = self
            .client
            .chat()
            .create_byot(self.request_body(&request))
            .await?;
        let reply = first_choice_text(body)?;

        log::info!("[RESPONSE] {}", preview(&reply, 200));
        Ok(reply)
    }
}
