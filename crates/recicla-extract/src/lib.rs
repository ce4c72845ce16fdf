//! recicla-extract
//!
//! Turns uploaded documents and images into text that can be placed in a
//! prompt. Every extractor returns `Result<String, ExtractError>`; the error
//! side renders with a fixed marker so a UI can show it where the content
//! would have appeared (see [`into_display_text`]).

pub mod error;
pub mod imaging;
pub mod pdf;
pub mod tabular;
pub mod text;
pub mod upload;

pub use error::ExtractError;

/// Collapse an extraction result into the string shown to the user.
pub fn into_display_text(result: Result<String, ExtractError>) -> String {
    result.unwrap_or_else(|e| e.to_string())
}
