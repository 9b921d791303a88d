use serde::Serialize;

use crate::models::domain::QuizQuestion;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonResponse {
    pub topic: String,
    /// HTML fragment exactly as returned by the model.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
    pub count: usize,
}

impl From<Vec<QuizQuestion>> for QuizResponse {
    fn from(questions: Vec<QuizQuestion>) -> Self {
        Self {
            count: questions.len(),
            questions,
        }
    }
}
