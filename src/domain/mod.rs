mod answer_payload;
mod ask_request;
mod message;
mod message_id;
mod message_role;
mod transcript;

pub use answer_payload::{ANSWER_FIELDS, AnswerPayload};
pub use ask_request::{AskRequest, DEFAULT_USER_ID};
pub use message::Message;
pub use message_id::MessageId;
pub use message_role::MessageRole;
pub use transcript::Transcript;
