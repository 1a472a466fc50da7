//! Parsing of JSON/YAML payloads that may be wrapped in a markdown code
//! fence, as language models and chat tools tend to return them.
//!
//! Results distinguish three cases: `Ok(None)` for blank input,
//! `Err(ParseError)` for content that does not parse, and `Ok(Some(_))`
//! for a parsed value.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Removes a surrounding ```` ``` ```` fence (and its language tag) if
/// present. The result is trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(after_fence) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match after_fence.find('\n') {
        Some(idx) => &after_fence[idx + 1..],
        None => after_fence,
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parses JSON, optionally fenced.
pub fn parse_markdown_json(text: &str) -> Result<Option<Value>, ParseError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(body)?))
}

/// Parses YAML, optionally fenced, into a JSON value.
pub fn parse_markdown_yaml(text: &str) -> Result<Option<Value>, ParseError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_yaml::from_str(body)?))
}

#[cfg(test)]
#[path = "fenced_tests.rs"]
mod tests;
