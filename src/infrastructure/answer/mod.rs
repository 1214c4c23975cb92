mod http_answer_client;
mod scripted_answer_client;

pub use http_answer_client::HttpAnswerClient;
pub use scripted_answer_client::{ScriptedAnswerClient, ScriptedReply};
