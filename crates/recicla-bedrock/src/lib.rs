//! recicla-bedrock
//!
//! Prompt assembly and Anthropic model invocation on Bedrock.

pub mod chat;
pub mod client;
pub mod context;
pub mod detections;
pub mod error;
pub mod invoke;
pub mod prompt;
