//! Anthropic Messages invocation through Bedrock `InvokeModel`.
//!
//! Every call produces exactly one [`InvocationResult`] with a fresh session
//! ID, whether the model answered or not. Failures are kept as a typed
//! [`BedrockError`] next to a user-facing fallback answer.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use recicla_core::models::attachment::ImageAttachment;
use recicla_core::models::sampling::SamplingParameters;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::client::{ModelRequest, ModelRuntime, RuntimeSource};
use crate::error::BedrockError;

/// Messages API version expected by Anthropic models on Bedrock.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

const JSON_CONTENT_TYPE: &str = "application/json";

const UNAVAILABLE_ERROR: &str = "Não foi possível conectar ao serviço Bedrock.";
const UNAVAILABLE_ANSWER: &str = "Erro de conexão com o modelo.";

// ── Result ───────────────────────────────────────────────────────────────────

/// Outcome of one model invocation.
///
/// `error` present ⇒ `answer` is a fallback message meant for display.
#[derive(Debug)]
pub struct InvocationResult {
    pub answer: String,
    pub session_id: Uuid,
    pub error: Option<BedrockError>,
}

impl InvocationResult {
    fn unavailable(session_id: Uuid) -> Self {
        Self {
            answer: UNAVAILABLE_ANSWER.to_string(),
            session_id,
            error: Some(BedrockError::ClientUnavailable(UNAVAILABLE_ERROR.to_string())),
        }
    }

    fn failed(session_id: Uuid, error: BedrockError) -> Self {
        Self {
            answer: format!(
                "Ocorreu um erro ao processar sua solicitação: {error}. Por favor, tente novamente."
            ),
            session_id,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Serializable view for UI layers.
    pub fn to_record(&self) -> InvocationRecord {
        InvocationRecord {
            answer: self.answer.clone(),
            session_id: self.session_id,
            error: self.error_message(),
        }
    }
}

/// Wire form of an [`InvocationResult`]: `{answer, sessionId, error?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRecord {
    pub answer: String,
    pub session_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct InvokeModelBody<'a> {
    anthropic_version: &'static str,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    top_k: u32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RequestContent<'a> {
    Image { source: ImageSource<'a> },
    Text { text: &'a str },
}

#[derive(Serialize)]
struct ImageSource<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: &'a str,
    data: String,
}

#[derive(Deserialize)]
struct InvokeModelResponse {
    content: Vec<ResponseContent>,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: Option<ResponseUsage>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ResponseUsage {
    input_tokens: u64,
    output_tokens: u64,
}

// ── Request / response mapping ───────────────────────────────────────────────

/// Serialize the `InvokeModel` body: one user message holding any image
/// attachments followed by the prompt text.
pub fn serialize_request(
    prompt: &str,
    params: &SamplingParameters,
    attachments: &[ImageAttachment],
) -> Result<Vec<u8>, BedrockError> {
    params
        .validate()
        .map_err(|e| BedrockError::Serialization(e.to_string()))?;

    let mut content: Vec<RequestContent<'_>> = attachments
        .iter()
        .map(|a| RequestContent::Image {
            source: ImageSource {
                kind: "base64",
                media_type: &a.media_type,
                data: BASE64.encode(&a.bytes),
            },
        })
        .collect();
    content.push(RequestContent::Text { text: prompt });

    let body = InvokeModelBody {
        anthropic_version: ANTHROPIC_VERSION,
        max_tokens: params.max_tokens,
        temperature: params.temperature,
        top_p: params.top_p,
        top_k: params.top_k,
        messages: vec![RequestMessage {
            role: "user",
            content,
        }],
    };

    serde_json::to_vec(&body).map_err(|e| BedrockError::Serialization(e.to_string()))
}

/// Extract the answer text (`content[0].text`) from a response body.
pub fn parse_response(body: &[u8]) -> Result<String, BedrockError> {
    answer_text(decode_response(body)?)
}

fn decode_response(body: &[u8]) -> Result<InvokeModelResponse, BedrockError> {
    serde_json::from_slice(body).map_err(|e| BedrockError::MalformedResponse(e.to_string()))
}

fn answer_text(response: InvokeModelResponse) -> Result<String, BedrockError> {
    let first = response.content.into_iter().next().ok_or_else(|| {
        BedrockError::MalformedResponse("response contained no content blocks".to_string())
    })?;

    first.text.ok_or_else(|| {
        BedrockError::MalformedResponse("first content block has no text".to_string())
    })
}

// ── Invocation ───────────────────────────────────────────────────────────────

/// Invoke `model_id` (an inference profile) with a text prompt.
///
/// `params` defaults to [`SamplingParameters::default`].
pub async fn invoke<S: RuntimeSource>(
    source: &S,
    prompt: &str,
    model_id: &str,
    params: Option<SamplingParameters>,
) -> InvocationResult {
    invoke_with_attachments(source, prompt, model_id, params, &[]).await
}

/// Invoke `model_id` with a text prompt and images for the model to look at.
pub async fn invoke_with_attachments<S: RuntimeSource>(
    source: &S,
    prompt: &str,
    model_id: &str,
    params: Option<SamplingParameters>,
    attachments: &[ImageAttachment],
) -> InvocationResult {
    let session_id = Uuid::new_v4();
    let params = params.unwrap_or_default();

    let Some(runtime) = source.acquire().await else {
        warn!(session_id = %session_id, model = model_id, "Bedrock runtime unavailable; skipping invocation");
        return InvocationResult::unavailable(session_id);
    };

    info!(
        session_id = %session_id,
        model = model_id,
        prompt_len = prompt.len(),
        attachments = attachments.len(),
        "invoking model"
    );

    match call_model(&runtime, prompt, model_id, &params, attachments).await {
        Ok(answer) => {
            info!(session_id = %session_id, answer_len = answer.len(), "model invocation complete");
            InvocationResult {
                answer,
                session_id,
                error: None,
            }
        }
        Err(e) => {
            error!(session_id = %session_id, model = model_id, error = %e, "model invocation failed");
            InvocationResult::failed(session_id, e)
        }
    }
}

async fn call_model<R: ModelRuntime>(
    runtime: &R,
    prompt: &str,
    model_id: &str,
    params: &SamplingParameters,
    attachments: &[ImageAttachment],
) -> Result<String, BedrockError> {
    let body = serialize_request(prompt, params, attachments)?;

    let raw = runtime
        .invoke(ModelRequest {
            model_id: model_id.to_string(),
            body,
            content_type: JSON_CONTENT_TYPE,
            accept: JSON_CONTENT_TYPE,
        })
        .await?;

    let response = decode_response(&raw)?;

    if let Some(usage) = &response.usage {
        info!(
            model = model_id,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
            "token usage"
        );
    }

    answer_text(response)
}
