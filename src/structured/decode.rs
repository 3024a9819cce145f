//! Response decoding: text extraction, fenced-JSON parsing and length limits.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::types::GenerateContentResponse;
use crate::{Error, ErrorContext, Result};

static FENCED_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json|JSON)?\s*([\s\S]*?)\s*```").expect("valid regex"));
static BARE_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[\s\S]*\}").expect("valid regex"));

/// Trimmed text of the first candidate.
///
/// Fails when the reply carries no text part at all; an empty string is
/// returned as-is so each caller can apply its own emptiness rule.
pub fn response_text(response: &GenerateContentResponse) -> Result<String> {
    response
        .text()
        .map(|t| t.trim().to_string())
        .ok_or_else(|| {
            Error::decode_with_context(
                "reply contains no text",
                ErrorContext::new()
                    .with_field_path("candidates[0].content.parts")
                    .with_details(format!(
                        "finish_reason={}",
                        response.finish_reason().unwrap_or("none")
                    ))
                    .with_source("response_decoder"),
            )
        })
}

/// Remove a surrounding Markdown code fence (```` ```json ... ``` ````) if present.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    match FENCED_JSON.captures(trimmed).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => trimmed,
    }
}

/// Parse a JSON reply into `T`, tolerating code fences and surrounding prose.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    let candidate = strip_code_fences(text);
    match serde_json::from_str::<T>(candidate) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            // Prose around the object: fall back to the outermost braces.
            if let Some(m) = BARE_OBJECT.find(candidate) {
                if let Ok(value) = serde_json::from_str::<T>(m.as_str()) {
                    return Ok(value);
                }
            }
            Err(Error::decode_with_context(
                format!("reply is not the expected JSON: {}", first_err),
                ErrorContext::new()
                    .with_details(preview(candidate))
                    .with_source("response_decoder"),
            ))
        }
    }
}

/// Decode a structured reply end to end.
pub fn decode_json<T: DeserializeOwned>(response: &GenerateContentResponse) -> Result<T> {
    let text = response_text(response)?;
    parse_json(&text)
}

/// Keep at most `max_chars` Unicode scalar values.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

fn preview(text: &str) -> String {
    let head = truncate_chars(text, 120);
    if head.len() < text.len() {
        format!("{}…", head)
    } else {
        head
    }
}
