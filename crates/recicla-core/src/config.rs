use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Region used when nothing else is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Environment variable carrying the optional credential-profile hint.
pub const PROFILE_ENV_VAR: &str = "AWS_PROFILE";

/// Where and how to reach the inference service.
///
/// Built once by the caller and passed explicitly to the client factory.
/// Never carries secret material: credentials always come from the
/// environment's credential chain or a named profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub region: String,
    pub credentials: CredentialSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Profile { profile_name: String },
    DefaultChain,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            credentials: CredentialSource::DefaultChain,
        }
    }
}

impl RuntimeConfig {
    pub fn new(region: impl Into<String>) -> Result<Self, CoreError> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(CoreError::InvalidRegion(region));
        }
        Ok(Self {
            region,
            credentials: CredentialSource::DefaultChain,
        })
    }

    pub fn with_profile(mut self, profile_name: impl Into<String>) -> Self {
        self.credentials = CredentialSource::Profile {
            profile_name: profile_name.into(),
        };
        self
    }

    /// Default region, with the profile hint taken from `AWS_PROFILE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`], reading variables through `lookup`.
    ///
    /// An unset or blank `AWS_PROFILE` selects the default credential chain.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let credentials = match lookup(PROFILE_ENV_VAR) {
            Some(name) if !name.trim().is_empty() => CredentialSource::Profile {
                profile_name: name.trim().to_string(),
            },
            _ => CredentialSource::DefaultChain,
        };

        Self {
            region: DEFAULT_REGION.to_string(),
            credentials,
        }
    }

    pub fn profile_name(&self) -> Option<&str> {
        match &self.credentials {
            CredentialSource::Profile { profile_name } => Some(profile_name),
            CredentialSource::DefaultChain => None,
        }
    }
}
