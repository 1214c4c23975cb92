use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::{HeaderMap, HeaderValue, Request, StatusCode};
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

use book_assistant::infrastructure::observability::{
    MAX_REQUEST_ID_LEN, REQUEST_ID_HEADER, RequestId, request_id_middleware,
};

fn echo_app() -> Router {
    Router::new()
        .route(
            "/echo",
            get(|Extension(id): Extension<RequestId>| async move { id.as_str().to_owned() }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

async fn echoed_id(header: Option<&str>) -> String {
    let mut builder = Request::builder().uri("/echo");
    if let Some(value) = header {
        builder = builder.header(REQUEST_ID_HEADER, value);
    }
    let response = echo_app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    response.headers()[REQUEST_ID_HEADER]
        .to_str()
        .unwrap()
        .to_string()
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_padded_header_when_reading_id_then_it_is_trimmed() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  trace-7 "));

    let id = RequestId::from_headers(&headers).expect("accepted");

    assert_eq!(id.as_str(), "trace-7");
}

#[test]
fn given_missing_header_when_reading_id_then_none() {
    assert_eq!(RequestId::from_headers(&HeaderMap::new()), None);
}

#[tokio::test]
async fn given_incoming_request_id_when_handled_then_echoed_on_response_and_extension() {
    let response = echo_app()
        .oneshot(
            Request::builder()
                .uri("/echo")
                .header(REQUEST_ID_HEADER, "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"req-42");
}

#[tokio::test]
async fn given_no_request_id_when_handled_then_generates_one() {
    let response = echo_app()
        .oneshot(Request::builder().uri("/echo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let generated = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn given_blank_request_id_when_handled_then_generates_one() {
    let generated = echoed_id(Some("   ")).await;

    assert!(uuid::Uuid::parse_str(&generated).is_ok());
}

#[tokio::test]
async fn given_overlong_request_id_when_handled_then_generates_one() {
    let overlong = "x".repeat(MAX_REQUEST_ID_LEN + 1);

    let generated = echoed_id(Some(&overlong)).await;

    assert_ne!(generated, overlong);
    assert!(uuid::Uuid::parse_str(&generated).is_ok());
}

#[tokio::test]
async fn given_id_with_spaces_inside_when_handled_then_generates_one() {
    let generated = echoed_id(Some("two words")).await;

    assert!(uuid::Uuid::parse_str(&generated).is_ok());
}

#[tokio::test]
async fn given_id_at_length_limit_when_handled_then_it_is_kept() {
    let at_limit = "a".repeat(MAX_REQUEST_ID_LEN);

    assert_eq!(echoed_id(Some(&at_limit)).await, at_limit);
}
