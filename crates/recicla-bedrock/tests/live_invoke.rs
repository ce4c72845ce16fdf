//! Integration tests against real Bedrock.
//!
//! These tests call real AWS APIs and require valid credentials in the
//! environment (instance role, `AWS_PROFILE`, or access keys) plus an
//! inference profile in `RECICLA_MODEL_ID`.
//!
//! Run with: `cargo test -p recicla-bedrock --test live_invoke -- --ignored`

use recicla_bedrock::client::{AwsRuntimeSource, acquire_runtime_client};
use recicla_bedrock::invoke::invoke;
use recicla_core::config::RuntimeConfig;

fn model_id() -> String {
    std::env::var("RECICLA_MODEL_ID")
        .unwrap_or_else(|_| "us.anthropic.claude-sonnet-4-6".to_string())
}

#[tokio::test]
#[ignore]
async fn acquires_runtime_client_from_environment() {
    let client = acquire_runtime_client(&RuntimeConfig::from_env()).await;
    assert!(client.is_some(), "expected ambient credentials to resolve");
}

#[tokio::test]
#[ignore]
async fn invoke_returns_an_answer() {
    let source = AwsRuntimeSource::new(RuntimeConfig::from_env());

    let result = invoke(&source, "Responda apenas: ok", &model_id(), None).await;

    println!("session {} -> {:?}", result.session_id, result.answer);
    assert!(result.is_success(), "invocation failed: {:?}", result.error);
    assert!(!result.answer.is_empty());
}

#[tokio::test]
#[ignore]
async fn unknown_model_reports_invocation_error() {
    let source = AwsRuntimeSource::new(RuntimeConfig::from_env());

    let result = invoke(&source, "Oi", "bad-arn", None).await;

    assert!(!result.is_success());
    assert!(result.answer.starts_with("Ocorreu um erro ao processar sua solicitação:"));
}
