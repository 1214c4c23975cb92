use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::AnswerClient;
use crate::domain::AskRequest;
use crate::infrastructure::observability::sanitize_message;
use crate::presentation::state::AppState;

/// Inbound relay body. Missing fields are forwarded as empty strings.
#[derive(Debug, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_id: String,
}

/// Body returned on both the success and the failure path.
#[derive(Debug, Serialize, Deserialize)]
pub struct RelayResponse {
    pub response: String,
}

/// Forwards the question upstream and reshapes the answer to
/// `{ "response": ... }`. Upstream failures of any kind become a 500 with the
/// configured apology.
#[tracing::instrument(skip(state, request))]
pub async fn ask_handler<A>(
    State(state): State<AppState<A>>,
    Json(request): Json<RelayRequest>,
) -> impl IntoResponse
where
    A: AnswerClient + ?Sized + 'static,
{
    let request = AskRequest::new(request.message, request.user_id);

    tracing::debug!(
        question = %sanitize_message(&request.message),
        upstream = %state.relay.upstream_url,
        "Relaying question"
    );

    match state.upstream.ask(&request).await {
        Ok(payload) => {
            tracing::info!(answered = payload.answer().is_some(), "Relay successful");
            (
                StatusCode::OK,
                Json(RelayResponse {
                    response: payload.answer_or(&state.relay.no_answer),
                }),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Upstream answer service failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayResponse {
                    response: state.relay.apology.clone(),
                }),
            )
        }
    }
}
