use std::{sync::Arc, time::Duration};

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    llm::{chat_with_deadline, LlmClient},
    models::dto::{request::GenerateLessonRequest, response::LessonResponse},
    services::prompt_builder::build_lesson_prompt,
};

pub struct LessonService {
    llm_client: Arc<dyn LlmClient>,
    call_timeout: Option<Duration>,
}

impl LessonService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self {
            llm_client,
            call_timeout: None,
        }
    }

    pub fn with_call_timeout(mut self, call_timeout: Option<Duration>) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Single pass: the model's HTML fragment is returned as-is.
    pub async fn generate_lesson(&self, request: GenerateLessonRequest) -> AppResult<LessonResponse> {
        request.validate()?;
        let topic = request.topic.trim();

        let prompt = build_lesson_prompt(topic, request.context.as_deref());
        let content = chat_with_deadline(self.llm_client.as_ref(), prompt, self.call_timeout).await?;

        if content.trim().is_empty() {
            return Err(AppError::EmptyResponse);
        }

        log::info!("Lesson generated for topic '{}' ({} bytes)", topic, content.len());

        Ok(LessonResponse {
            topic: topic.to_string(),
            content,
        })
    }
}
