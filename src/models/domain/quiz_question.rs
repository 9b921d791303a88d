use serde::{Deserialize, Serialize};

pub const OPTION_COUNT: usize = 4;

/// A validated multiple-choice question.
///
/// Serialised with the same keys the model is asked to produce (`q`, `options`,
/// `correct`, `explain`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    #[serde(rename = "q")]
    pub question: String,
    pub options: [String; OPTION_COUNT],
    #[serde(rename = "correct")]
    pub correct_index: u8,
    #[serde(rename = "explain", default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> &str {
        &self.options[usize::from(self.correct_index)]
    }
}
