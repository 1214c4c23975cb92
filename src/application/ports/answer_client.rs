use async_trait::async_trait;

use crate::domain::{AnswerPayload, AskRequest};

/// Outbound seam towards whatever computes answers: the relay, or the
/// answer service itself.
#[async_trait]
pub trait AnswerClient: Send + Sync {
    async fn ask(&self, request: &AskRequest) -> Result<AnswerPayload, AnswerClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerClientError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("non-success status: {0}")]
    Status(u16),
    #[error("malformed body: {0}")]
    MalformedBody(String),
}
