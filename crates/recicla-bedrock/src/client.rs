//! Client acquisition and the seams the invoker talks through.
//!
//! Production code goes through [`AwsRuntimeSource`], which builds a Bedrock
//! Runtime client from the caller's [`RuntimeConfig`]. Tests substitute their
//! own [`RuntimeSource`] / [`ModelRuntime`] implementations.

use std::future::Future;
use std::pin::Pin;

use aws_smithy_types::Blob;
use recicla_core::config::{CredentialSource, RuntimeConfig};
use tracing::{debug, warn};

use crate::error::{BedrockError, format_err_chain};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Service name used in diagnostics for the inference runtime.
pub const RUNTIME_SERVICE: &str = "bedrock-runtime";

/// Build an `SdkConfig` from the runtime configuration.
///
/// Only ambient credentials are used: the default provider chain, or a
/// named profile from `~/.aws` when one is configured.
pub async fn build_sdk_config(config: &RuntimeConfig) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let CredentialSource::Profile { profile_name } = &config.credentials {
        builder = builder.profile_name(profile_name);
    }

    builder.load().await
}

/// Build an AWS service client with `build`, or `None` if the ambient
/// credentials can't be used.
///
/// A single attempt: the credentials are checked once with STS
/// `GetCallerIdentity`. Failures (no credentials, bad profile, network,
/// permissions) are logged and swallowed so callers can degrade gracefully.
pub async fn acquire_client<C>(
    service_name: &str,
    config: &RuntimeConfig,
    build: impl FnOnce(&aws_config::SdkConfig) -> C,
) -> Option<C> {
    let sdk_config = build_sdk_config(config).await;

    match validate_credentials(&sdk_config).await {
        Ok(caller_arn) => {
            debug!(
                service = service_name,
                region = %config.region,
                profile = ?config.profile_name(),
                caller = %caller_arn,
                "acquired AWS client from ambient credentials"
            );
            Some(build(&sdk_config))
        }
        Err(reason) => {
            warn!(
                service = service_name,
                region = %config.region,
                profile = ?config.profile_name(),
                %reason,
                "could not access AWS; check the instance role or AWS_PROFILE"
            );
            None
        }
    }
}

/// Bedrock Runtime client for `config`, or `None` if AWS is unreachable.
pub async fn acquire_runtime_client(
    config: &RuntimeConfig,
) -> Option<aws_sdk_bedrockruntime::Client> {
    acquire_client(RUNTIME_SERVICE, config, aws_sdk_bedrockruntime::Client::new).await
}

/// Call STS GetCallerIdentity and return the caller ARN.
async fn validate_credentials(sdk_config: &aws_config::SdkConfig) -> Result<String, String> {
    let sts = aws_sdk_sts::Client::new(sdk_config);
    let resp = sts
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| format_err_chain(&e))?;

    Ok(resp.arn().unwrap_or_default().to_string())
}

// ── Seams ────────────────────────────────────────────────────────────────────

/// A raw `InvokeModel` request.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    /// Inference profile ID or ARN.
    pub model_id: String,
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub accept: &'static str,
}

/// Something that can run an `InvokeModel` call and return the raw body.
pub trait ModelRuntime: Send + Sync {
    fn invoke(&self, request: ModelRequest) -> BoxFuture<'_, Result<Vec<u8>, BedrockError>>;
}

impl ModelRuntime for aws_sdk_bedrockruntime::Client {
    fn invoke(&self, request: ModelRequest) -> BoxFuture<'_, Result<Vec<u8>, BedrockError>> {
        Box::pin(async move {
            let output = self
                .invoke_model()
                .model_id(request.model_id)
                .content_type(request.content_type)
                .accept(request.accept)
                .body(Blob::new(request.body))
                .send()
                .await
                .map_err(|e| BedrockError::Invocation(format_err_chain(&e)))?;

            Ok(output.body().as_ref().to_vec())
        })
    }
}

/// Hands out a [`ModelRuntime`] per invocation. `None` = service unavailable.
pub trait RuntimeSource: Send + Sync {
    type Runtime: ModelRuntime;

    fn acquire(&self) -> BoxFuture<'_, Option<Self::Runtime>>;
}

/// Acquires a Bedrock Runtime client from ambient AWS credentials.
#[derive(Debug, Clone)]
pub struct AwsRuntimeSource {
    config: RuntimeConfig,
}

impl AwsRuntimeSource {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}

impl RuntimeSource for AwsRuntimeSource {
    type Runtime = aws_sdk_bedrockruntime::Client;

    fn acquire(&self) -> BoxFuture<'_, Option<Self::Runtime>> {
        Box::pin(acquire_runtime_client(&self.config))
    }
}
