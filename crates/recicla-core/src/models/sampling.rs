use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Sampling knobs sent with every model invocation.
///
/// Callers replace the whole set; there is no per-field override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParameters {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_tokens: u32,
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 200,
            max_tokens: 800,
        }
    }
}

impl SamplingParameters {
    /// Check the values against the ranges Anthropic models accept.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(CoreError::InvalidSampling {
                name: "temperature",
                value: self.temperature.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(CoreError::InvalidSampling {
                name: "top_p",
                value: self.top_p.to_string(),
            });
        }
        if self.max_tokens == 0 {
            return Err(CoreError::InvalidSampling {
                name: "max_tokens",
                value: self.max_tokens.to_string(),
            });
        }
        Ok(())
    }
}
