//! Context block builder for chat prompts.
//!
//! Wraps extracted upload text (or any other reference text) in labelled
//! sections that are placed right before the user's message.

use serde::{Deserialize, Serialize};

/// Label used when the caller doesn't name the context source.
pub const DEFAULT_CONTEXT_SOURCE: &str = "Contexto Adicional";

/// A piece of reference text and where it came from (e.g. a file name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSource {
    pub source: String,
    pub text: String,
}

impl ContextSource {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// Format one context section: blank line, `source:` header, the text,
/// then a blank line.
pub fn format_context(context: &str, source: Option<&str>) -> String {
    let source = source.unwrap_or(DEFAULT_CONTEXT_SOURCE);
    format!("\n\n{source}:\n{context}\n\n")
}

/// Concatenate formatted sections for every source.
///
/// If `sources` is empty, returns an empty string (no context to inject).
pub fn build_context(sources: &[ContextSource]) -> String {
    sources
        .iter()
        .map(|s| format_context(&s.text, Some(&s.source)))
        .collect()
}
