use std::{sync::Arc, time::Duration};

use validator::Validate;

use crate::{
    constants::prompts::QUIZ_CORRECTION_HINT,
    errors::{AppError, AppResult},
    llm::{chat_with_deadline, ChatRequest, LlmClient},
    models::{
        domain::{Difficulty, QuizQuestion},
        dto::{request::GenerateQuizRequest, response::QuizResponse},
    },
    services::{prompt_builder::build_quiz_prompt, quiz_validator, response_extractor},
};

/// One initial attempt plus one corrective retry.
pub const MAX_ATTEMPTS: u32 = 2;

pub struct QuizService {
    llm_client: Arc<dyn LlmClient>,
    call_timeout: Option<Duration>,
}

impl QuizService {
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

    pub async fn generate_quiz(&self, request: GenerateQuizRequest) -> AppResult<QuizResponse> {
        request.validate()?;
        let difficulty = request.parsed_difficulty()?;

        let questions = self
            .generate_questions(&request.content, request.num_questions_or_default(), difficulty)
            .await?;

        Ok(QuizResponse::from(questions))
    }

    async fn generate_questions(
        &self,
        content: &str,
        num_questions: u32,
        difficulty: Option<Difficulty>,
    ) -> AppResult<Vec<QuizQuestion>> {
        let mut prompt = build_quiz_prompt(content, num_questions, difficulty);
        let mut last_error = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.attempt(prompt.clone()).await {
                Ok(questions) => {
                    log::info!(
                        "Quiz generated: {} questions (attempt {})",
                        questions.len(),
                        attempt
                    );
                    return Ok(questions);
                }
                Err(err) if err.is_malformed_output() => {
                    log::warn!(
                        "Quiz parse attempt {}/{} failed: {}",
                        attempt,
                        MAX_ATTEMPTS,
                        err
                    );
                    prompt = ChatRequest {
                        user_message: format!("{}{}", QUIZ_CORRECTION_HINT, prompt.user_message),
                        ..prompt
                    };
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(AppError::QuizGenerationError {
            attempts: MAX_ATTEMPTS,
            last: Box::new(last_error.unwrap_or_else(|| {
                AppError::InternalError("quiz retry loop ran no attempts".to_string())
            })),
        })
    }

    async fn attempt(&self, prompt: ChatRequest) -> AppResult<Vec<QuizQuestion>> {
        let raw = chat_with_deadline(self.llm_client.as_ref(), prompt, self.call_timeout).await?;
        let records = response_extractor::extract_array(&raw)?;
        quiz_validator::validate(&records)
    }
}
