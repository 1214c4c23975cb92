use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{AnswerClient, AnswerClientError};
use crate::domain::{AnswerPayload, AskRequest};

/// What the scripted client does for one call.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Body(Value),
    Status(u16),
    Transport(String),
    MalformedBody(String),
}

/// In-memory answer service replaying a fixed script. Records every request
/// it receives. Once the script is exhausted it answers with an empty object.
#[derive(Default)]
pub struct ScriptedAnswerClient {
    script: Mutex<VecDeque<ScriptedReply>>,
    received: Mutex<Vec<AskRequest>>,
}

impl ScriptedAnswerClient {
    pub fn new(script: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn answering(text: &str) -> Self {
        Self::new([ScriptedReply::Body(serde_json::json!({ "response": text }))])
    }

    pub fn failing() -> Self {
        Self::new([ScriptedReply::Transport("connection refused".to_string())])
    }

    pub fn received(&self) -> Vec<AskRequest> {
        self.received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AnswerClient for ScriptedAnswerClient {
    async fn ask(&self, request: &AskRequest) -> Result<AnswerPayload, AnswerClientError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(request.clone());
        }

        let reply = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| ScriptedReply::Body(serde_json::json!({})));

        match reply {
            ScriptedReply::Body(value) => Ok(AnswerPayload::new(value)),
            ScriptedReply::Status(status) => Err(AnswerClientError::Status(status)),
            ScriptedReply::Transport(reason) => Err(AnswerClientError::Transport(reason)),
            ScriptedReply::MalformedBody(reason) => Err(AnswerClientError::MalformedBody(reason)),
        }
    }
}
