use serde_json::{Map, Value};

use crate::{
    errors::{AppError, AppResult, QuestionField, SchemaViolation},
    models::domain::{quiz_question::OPTION_COUNT, QuizQuestion},
};

fn violation(question: Option<usize>, field: QuestionField, message: &str) -> AppError {
    AppError::ValidationError(SchemaViolation::new(question, field, message))
}

fn validate_record(label: usize, item: &Value) -> AppResult<QuizQuestion> {
    let at = Some(label);
    let record: &Map<String, Value> = item
        .as_object()
        .ok_or_else(|| violation(at, QuestionField::Record, "not an object"))?;

    let question = record
        .get("q")
        .and_then(Value::as_str)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| violation(at, QuestionField::Question, "missing or invalid 'q'"))?;

    let options = record
        .get("options")
        .and_then(Value::as_array)
        .filter(|opts| opts.len() == OPTION_COUNT)
        .ok_or_else(|| {
            violation(
                at,
                QuestionField::Options,
                "'options' must be an array of 4 strings",
            )
        })?;

    let mut texts: [String; OPTION_COUNT] = Default::default();
    for (slot, option) in texts.iter_mut().zip(options) {
        *slot = option
            .as_str()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                violation(
                    at,
                    QuestionField::Options,
                    "each option must be a non-empty string",
                )
            })?
            .to_string();
    }

    let correct_index = record
        .get("correct")
        .and_then(Value::as_u64)
        .filter(|index| *index < OPTION_COUNT as u64)
        .ok_or_else(|| violation(at, QuestionField::Correct, "'correct' must be an integer 0-3"))?;

    let explanation = match record.get("explain") {
        None => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => return Err(violation(at, QuestionField::Explain, "'explain' must be a string")),
    };

    Ok(QuizQuestion {
        question: question.to_string(),
        options: texts,
        correct_index: correct_index as u8,
        explanation,
    })
}

/// Check every extracted record against the quiz question shape and convert it.
///
/// Stops at the first violation; question labels are 1-indexed.
pub fn validate(records: &[Value]) -> AppResult<Vec<QuizQuestion>> {
    if records.is_empty() {
        return Err(violation(
            None,
            QuestionField::Questions,
            "Response is not a non-empty list",
        ));
    }

    records
        .iter()
        .enumerate()
        .map(|(index, item)| validate_record(index + 1, item))
        .collect()
}
