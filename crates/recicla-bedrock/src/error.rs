use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("{0}")]
    ClientUnavailable(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),
}

/// Walk the full error chain and join all causes into one string.
///
/// AWS SDK errors often have terse `Display` impls (e.g. "service error")
/// but useful detail in the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
