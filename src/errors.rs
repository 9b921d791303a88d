use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Field of a quiz record that failed schema validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    /// The record set itself (not a non-empty array).
    Questions,
    /// An element that is not a JSON object.
    Record,
    Question,
    Options,
    Correct,
    Explain,
}

impl fmt::Display for QuestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionField::Questions => write!(f, "questions"),
            QuestionField::Record => write!(f, "record"),
            QuestionField::Question => write!(f, "q"),
            QuestionField::Options => write!(f, "options"),
            QuestionField::Correct => write!(f, "correct"),
            QuestionField::Explain => write!(f, "explain"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// 1-indexed position of the offending question, `None` for set-level failures.
    pub question: Option<usize>,
    pub field: QuestionField,
    pub message: String,
}

impl SchemaViolation {
    pub fn new(question: Option<usize>, field: QuestionField, message: impl Into<String>) -> Self {
        Self {
            question,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.question {
            Some(index) => write!(f, "Question {}: {}", index, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InputError(String),

    #[error("LLM transport error: {0}")]
    TransportError(String),

    #[error("Extraction error: {0}")]
    ExtractionError(String),

    #[error("Validation error: {0}")]
    ValidationError(SchemaViolation),

    #[error("Failed to generate quiz after {attempts} attempts: {last}")]
    QuizGenerationError { attempts: u32, last: Box<AppError> },

    #[error("LLM returned an empty response")]
    EmptyResponse,

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::InputError(_) => "INPUT_ERROR",
            AppError::TransportError(_) => "SERVICE_UNAVAILABLE",
            AppError::ExtractionError(_) => "EXTRACTION_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::QuizGenerationError { .. } => "QUIZ_GENERATION_ERROR",
            AppError::EmptyResponse => "EMPTY_RESPONSE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Extraction and validation failures are the ones the quiz retry loop recovers from.
    pub fn is_malformed_output(&self) -> bool {
        matches!(
            self,
            AppError::ExtractionError(_) | AppError::ValidationError(_)
        )
    }

    fn public_message(&self) -> String {
        match self {
            AppError::TransportError(_) => "AI service unavailable".to_string(),
            AppError::InternalError(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InputError(_) => StatusCode::BAD_REQUEST,
            AppError::TransportError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::QuizGenerationError { .. } | AppError::EmptyResponse => {
                StatusCode::BAD_GATEWAY
            }
            AppError::ExtractionError(_)
            | AppError::ValidationError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
            code: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InputError(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::TransportError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
