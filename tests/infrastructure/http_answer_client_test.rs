use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, response::IntoResponse};
use tokio::net::TcpListener;

use book_assistant::application::ports::{AnswerClient, AnswerClientError};
use book_assistant::domain::{AskRequest, DEFAULT_USER_ID};
use book_assistant::infrastructure::answer::HttpAnswerClient;

async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/chat", addr)
}

async fn unused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/chat", addr)
}

#[tokio::test]
async fn given_answering_upstream_when_asking_then_forwards_body_and_returns_payload() {
    let endpoint = spawn_upstream(Router::new().route(
        "/chat",
        post(|Json(request): Json<AskRequest>| async move {
            Json(serde_json::json!({
                "response": format!("{} from {}", request.message, request.user_id)
            }))
        }),
    ))
    .await;
    let client = HttpAnswerClient::new(endpoint);

    let payload = client
        .ask(&AskRequest::new("hello", DEFAULT_USER_ID))
        .await
        .unwrap();

    assert_eq!(payload.answer(), Some("hello from website-user"));
}

#[tokio::test]
async fn given_failing_upstream_when_asking_then_returns_status_error() {
    let endpoint = spawn_upstream(Router::new().route(
        "/chat",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down").into_response() }),
    ))
    .await;
    let client = HttpAnswerClient::new(endpoint);

    let result = client.ask(&AskRequest::new("hello", DEFAULT_USER_ID)).await;

    assert!(matches!(result, Err(AnswerClientError::Status(503))));
}

#[tokio::test]
async fn given_non_json_body_when_asking_then_returns_malformed_body_error() {
    let endpoint = spawn_upstream(
        Router::new().route("/chat", post(|| async { "<html>oops</html>" })),
    )
    .await;
    let client = HttpAnswerClient::new(endpoint);

    let result = client.ask(&AskRequest::new("hello", DEFAULT_USER_ID)).await;

    assert!(matches!(result, Err(AnswerClientError::MalformedBody(_))));
}

#[tokio::test]
async fn given_unreachable_endpoint_when_asking_then_returns_transport_error() {
    let client = HttpAnswerClient::new(unused_endpoint().await);

    let result = client.ask(&AskRequest::new("hello", DEFAULT_USER_ID)).await;

    assert!(matches!(result, Err(AnswerClientError::Transport(_))));
}
