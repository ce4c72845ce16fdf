//! recicla-core
//!
//! Pure domain types and runtime configuration.
//! No AWS SDK dependency — this is the shared vocabulary of the Recicla system.

pub mod config;
pub mod error;
pub mod models;
