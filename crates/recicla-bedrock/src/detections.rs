//! Parsing of the model's JSON answer into detected items.

use recicla_core::models::detection::DetectedItem;

use crate::error::BedrockError;

/// Parse the JSON list the analysis prompt asks for.
///
/// Surrounding whitespace and a Markdown code fence (```` ```json ````) are
/// tolerated; anything else that isn't the expected list is a schema
/// violation.
pub fn parse_detections(answer: &str) -> Result<Vec<DetectedItem>, BedrockError> {
    let json = strip_code_fence(answer.trim());

    serde_json::from_str(json).map_err(|e| {
        BedrockError::SchemaViolation(format!(
            "failed to parse detected items: {e}. Response: {answer}"
        ))
    })
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. `json`) on the opening fence line. A fence
    // closed on the same line keeps whatever follows the info string.
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
