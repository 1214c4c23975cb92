use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{AnswerClient, AnswerClientError};
use crate::domain::{AnswerPayload, AskRequest};

/// Posts questions as JSON to a fixed endpoint.
///
/// No timeout is configured: a stalled call stays outstanding until the
/// network stack gives up.
pub struct HttpAnswerClient {
    client: Client,
    endpoint: String,
}

impl HttpAnswerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerClient for HttpAnswerClient {
    async fn ask(&self, request: &AskRequest) -> Result<AnswerPayload, AnswerClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AnswerClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "Answer endpoint rejected request"
            );
            return Err(AnswerClientError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AnswerClientError::Transport(e.to_string()))?;

        serde_json::from_slice::<serde_json::Value>(&body)
            .map(AnswerPayload::new)
            .map_err(|e| AnswerClientError::MalformedBody(e.to_string()))
    }
}
