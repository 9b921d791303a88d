use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{errors::AppResult, models::domain::Difficulty};

pub const DEFAULT_NUM_QUESTIONS: u32 = 5;
pub const MIN_NUM_QUESTIONS: u32 = 1;
pub const MAX_NUM_QUESTIONS: u32 = 20;

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateLessonRequest {
    #[validate(
        length(max = 255, message = "must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub topic: String,

    /// Reference material to weave into the lesson.
    pub context: Option<String>,
}

impl GenerateLessonRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    #[validate(range(
        min = MIN_NUM_QUESTIONS,
        max = MAX_NUM_QUESTIONS,
        message = "num_questions must be between 1 and 20"
    ))]
    pub num_questions: Option<u32>,

    /// One of `easy`, `medium` or `hard`.
    pub difficulty: Option<String>,
}

impl GenerateQuizRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            num_questions: None,
            difficulty: None,
        }
    }

    pub fn with_num_questions(mut self, num_questions: u32) -> Self {
        self.num_questions = Some(num_questions);
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn num_questions_or_default(&self) -> u32 {
        self.num_questions.unwrap_or(DEFAULT_NUM_QUESTIONS)
    }

    /// Parsed difficulty; a blank value means no difficulty hint.
    pub fn parsed_difficulty(&self) -> AppResult<Option<Difficulty>> {
        self.difficulty
            .as_deref()
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .map(str::parse::<Difficulty>)
            .transpose()
    }
}
