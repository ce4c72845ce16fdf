#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use recicla_bedrock::client::{BoxFuture, ModelRequest, ModelRuntime, RuntimeSource};
use recicla_bedrock::error::BedrockError;

/// Runtime that records every request and replies with a canned body or error.
#[derive(Clone)]
pub struct FakeRuntime {
    reply: Result<Vec<u8>, String>,
    pub calls: Arc<Mutex<Vec<ModelRequest>>>,
}

impl FakeRuntime {
    pub fn answering(text: &str) -> Self {
        let body = serde_json::json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{ "type": "text", "text": text }],
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 120, "output_tokens": 30 }
        });
        Self::replying(serde_json::to_vec(&body).unwrap())
    }

    pub fn replying(body: Vec<u8>) -> Self {
        Self {
            reply: Ok(body),
            calls: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<ModelRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> serde_json::Value {
        let requests = self.requests();
        let last = requests.last().expect("no request recorded");
        serde_json::from_slice(&last.body).unwrap()
    }
}

impl ModelRuntime for FakeRuntime {
    fn invoke(&self, request: ModelRequest) -> BoxFuture<'_, Result<Vec<u8>, BedrockError>> {
        self.calls.lock().unwrap().push(request);
        let reply = self.reply.clone().map_err(BedrockError::Invocation);
        Box::pin(async move { reply })
    }
}

/// Source handing out clones of one fake runtime, or nothing at all.
pub struct FakeSource {
    runtime: Option<FakeRuntime>,
}

impl FakeSource {
    pub fn with(runtime: FakeRuntime) -> Self {
        Self {
            runtime: Some(runtime),
        }
    }

    pub fn unavailable() -> Self {
        Self { runtime: None }
    }
}

impl RuntimeSource for FakeSource {
    type Runtime = FakeRuntime;

    fn acquire(&self) -> BoxFuture<'_, Option<FakeRuntime>> {
        let runtime = self.runtime.clone();
        Box::pin(async move { runtime })
    }
}
