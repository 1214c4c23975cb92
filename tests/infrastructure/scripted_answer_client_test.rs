use book_assistant::application::ports::{AnswerClient, AnswerClientError};
use book_assistant::domain::AskRequest;
use book_assistant::infrastructure::answer::{ScriptedAnswerClient, ScriptedReply};
use serde_json::json;

#[tokio::test]
async fn given_script_when_asked_repeatedly_then_replays_in_order_and_records_requests() {
    let client = ScriptedAnswerClient::new([
        ScriptedReply::Body(json!({ "response": "one" })),
        ScriptedReply::Status(502),
    ]);

    let first = client.ask(&AskRequest::new("a", "u")).await;
    let second = client.ask(&AskRequest::new("b", "u")).await;
    let exhausted = client.ask(&AskRequest::new("c", "u")).await;

    assert_eq!(first.unwrap().answer(), Some("one"));
    assert!(matches!(second, Err(AnswerClientError::Status(502))));
    assert_eq!(exhausted.unwrap().answer(), None);
    assert_eq!(client.received().len(), 3);
}
