use serde::{Deserialize, Serialize};

/// Visitor identity sent with every question. Sessions are not tracked.
pub const DEFAULT_USER_ID: &str = "website-user";

/// Body posted to the relay or directly to the answer service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
    pub user_id: String,
}

impl AskRequest {
    pub fn new(message: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user_id: user_id.into(),
        }
    }
}
