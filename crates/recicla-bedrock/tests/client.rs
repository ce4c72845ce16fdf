use recicla_bedrock::client::{
    AwsRuntimeSource, BoxFuture, RuntimeSource, acquire_client, build_sdk_config,
};
use recicla_core::config::RuntimeConfig;

fn assert_send<T: Send>(_: &T) {}

#[tokio::test]
async fn sdk_config_uses_configured_region() {
    let config = RuntimeConfig::new("sa-east-1").unwrap();

    let sdk_config = build_sdk_config(&config).await;

    assert_eq!(sdk_config.region().map(ToString::to_string).as_deref(), Some("sa-east-1"));
    assert!(sdk_config.credentials_provider().is_some());
}

#[tokio::test]
async fn sdk_config_accepts_profile_hint() {
    let config = RuntimeConfig::default().with_profile("recicla-test");

    let sdk_config = build_sdk_config(&config).await;

    assert_eq!(sdk_config.region().map(ToString::to_string).as_deref(), Some("us-east-1"));
}

#[test]
fn aws_source_hands_out_bedrock_runtime_clients() {
    let source = AwsRuntimeSource::new(RuntimeConfig::default());

    let pending: BoxFuture<'_, Option<aws_sdk_bedrockruntime::Client>> = source.acquire();
    assert_send(&pending);
}

#[test]
fn acquire_client_takes_any_constructor() {
    let config = RuntimeConfig::default();

    let pending = acquire_client("bedrock-runtime", &config, aws_sdk_bedrockruntime::Client::new);
    assert_send(&pending);

    let pending = acquire_client("sts", &config, |sdk| sdk.region().cloned());
    assert_send(&pending);
}
