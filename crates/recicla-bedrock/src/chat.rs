//! One-call chat flow: assemble the prompt for a user message, then invoke
//! the model with it.

use recicla_core::models::attachment::ImageAttachment;
use recicla_core::models::conversation::ConversationTurn;
use recicla_core::models::sampling::SamplingParameters;
use tracing::info;

use crate::client::RuntimeSource;
use crate::invoke::{InvocationResult, invoke_with_attachments};
use crate::prompt::{PromptTemplate, build_prompt};

/// Everything the UI collects for one chat turn.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub message: String,
    /// Full history, oldest first. Only the recent window reaches the prompt.
    pub history: Vec<ConversationTurn>,
    /// Pre-formatted context (see [`crate::context`]).
    pub context: Option<String>,
    pub attachments: Vec<ImageAttachment>,
    pub sampling: Option<SamplingParameters>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_attachment(mut self, attachment: ImageAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingParameters) -> Self {
        self.sampling = Some(sampling);
        self
    }
}

/// Build the prompt for `request` and send it to `model_id`.
pub async fn chat<S: RuntimeSource>(
    source: &S,
    template: &PromptTemplate,
    model_id: &str,
    request: &ChatRequest,
) -> InvocationResult {
    let prompt = build_prompt(
        template,
        &request.message,
        &request.history,
        request.context.as_deref(),
    );

    info!(
        model = model_id,
        history_len = request.history.len(),
        has_context = request.context.is_some(),
        "sending chat message"
    );

    invoke_with_attachments(
        source,
        &prompt,
        model_id,
        request.sampling,
        &request.attachments,
    )
    .await
}
