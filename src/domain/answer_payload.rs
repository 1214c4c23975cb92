use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer-bearing fields accepted from upstream services, in priority order.
///
/// Backend variants disagree on the name of the field carrying the answer
/// text. The first field holding a non-empty string wins.
pub const ANSWER_FIELDS: [&str; 3] = ["response", "answer", "error"];

/// JSON body returned by an answer service.
///
/// Kept as a raw value so that unexpected shapes degrade to the caller's
/// fallback text instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerPayload(Value);

impl AnswerPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn answer(&self) -> Option<&str> {
        ANSWER_FIELDS.iter().find_map(|field| {
            self.0
                .get(field)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
        })
    }

    pub fn answer_or(&self, fallback: &str) -> String {
        self.answer().unwrap_or(fallback).to_string()
    }
}
