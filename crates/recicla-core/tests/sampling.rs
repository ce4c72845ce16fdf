use recicla_core::error::CoreError;
use recicla_core::models::sampling::SamplingParameters;

#[test]
fn defaults_match_documented_values() {
    let params = SamplingParameters::default();
    assert_eq!(params.temperature, 1.0);
    assert_eq!(params.top_p, 0.95);
    assert_eq!(params.top_k, 200);
    assert_eq!(params.max_tokens, 800);
    assert!(params.validate().is_ok());
}

#[test]
fn temperature_above_one_is_rejected() {
    let params = SamplingParameters {
        temperature: 1.5,
        ..SamplingParameters::default()
    };
    assert!(matches!(
        params.validate(),
        Err(CoreError::InvalidSampling { name: "temperature", .. })
    ));
}

#[test]
fn zero_max_tokens_is_rejected() {
    let params = SamplingParameters {
        max_tokens: 0,
        ..SamplingParameters::default()
    };
    assert!(matches!(
        params.validate(),
        Err(CoreError::InvalidSampling { name: "max_tokens", .. })
    ));
}
