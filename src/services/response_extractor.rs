use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*\n?(.*?)\n?\s*```")
        .expect("FENCED_BLOCK is a valid regex pattern")
});

fn parse_array(candidate: &str) -> Option<Vec<Value>> {
    serde_json::from_str::<Vec<Value>>(candidate).ok()
}

fn direct(text: &str) -> Option<Vec<Value>> {
    if text.starts_with('[') {
        parse_array(text)
    } else {
        None
    }
}

fn fenced(text: &str) -> Option<Vec<Value>> {
    let captures = FENCED_BLOCK.captures(text)?;
    parse_array(captures.get(1)?.as_str().trim())
}

fn bracket_scan(text: &str) -> Option<Vec<Value>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if start < end {
        parse_array(&text[start..=end])
    } else {
        None
    }
}

/// Recover a JSON array from free-form model output.
///
/// Strategies run in order and the first that yields an array wins: the trimmed text
/// itself, the first fenced code block, then the span from the first `[` to the last `]`.
pub fn extract_array(raw: &str) -> AppResult<Vec<Value>> {
    let text = raw.trim();

    direct(text)
        .or_else(|| fenced(text))
        .or_else(|| bracket_scan(text))
        .ok_or_else(|| {
            AppError::ExtractionError("could not extract a JSON array from the response".to_string())
        })
}
