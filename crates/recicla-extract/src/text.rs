use crate::error::ExtractError;

/// Decode raw bytes as UTF-8, verbatim.
pub fn extract_plain_text(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::Text(e.to_string()))
}
