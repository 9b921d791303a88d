use std::{fmt, str::FromStr};

use crate::errors::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Cognitive level the questions should target, as phrased to the model.
    pub fn cognitive_level(&self) -> &'static str {
        match self {
            Difficulty::Easy => "recall and recognition",
            Difficulty::Medium => "comprehension and low application",
            Difficulty::Hard => "high application and analysis",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(AppError::InputError(format!(
                "unrecognized difficulty '{}', expected easy, medium or hard",
                other
            ))),
        }
    }
}
