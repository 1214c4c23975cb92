mod answer_client;

pub use answer_client::{AnswerClient, AnswerClientError};
