#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    /// A well-formed quiz record with the given question text and answer index.
    pub fn question_record(question: &str, correct: u8) -> Value {
        json!({
            "q": question,
            "options": ["Alpha", "Beta", "Gamma", "Delta"],
            "correct": correct,
            "explain": "Taken from the lesson."
        })
    }

    /// A model reply containing `count` valid questions as a bare JSON array.
    pub fn valid_quiz_json(count: usize) -> String {
        let records: Vec<Value> = (0..count)
            .map(|i| question_record(&format!("Question number {}?", i + 1), (i % 4) as u8))
            .collect();
        Value::Array(records).to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_valid_quiz_json() {
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&valid_quiz_json(5)).unwrap();

        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[4]["q"], "Question number 5?");
        assert_eq!(parsed[4]["correct"], 0);
    }
}
