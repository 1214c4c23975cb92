use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::application::ports::{AnswerClient, AnswerClientError};
use crate::domain::{
    AnswerPayload, AskRequest, DEFAULT_USER_ID, MessageId, MessageRole, Transcript,
};

/// Tickets are drawn from one process-wide sequence so a completion can never
/// match the outstanding request of a different controller.
static NEXT_TICKET: AtomicU64 = AtomicU64::new(0);

pub const DEFAULT_GREETING: &str = "Hello! I'm your AI assistant for Physical AI & Humanoid Robotics. Ask me anything about robotics, AI, or the book content!";

/// Shown when the service answered successfully but with no usable answer field.
pub const NO_ANSWER_FALLBACK: &str = "Sorry, I don't have an answer for that.";

pub const STATUS_FAILURE_FALLBACK: &str =
    "I'm sorry, I couldn't process your question. The RAG backend might not be running.";

pub const TRANSPORT_FAILURE_FALLBACK: &str =
    "I'm sorry, there was an error communicating with the backend.";

#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub user_id: String,
    pub greeting: String,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Submitting,
}

/// Owns one conversation: the transcript, the input buffer and the single
/// outstanding request.
///
/// Submission is split in three steps so that a UI can keep handling events
/// while the request is in flight:
///
/// 1. [`begin`](Self::begin) appends the user message and enters `Submitting`.
/// 2. [`PendingAsk::send`] performs the request without borrowing the controller.
/// 3. [`finish`](Self::finish) appends the answer (or a fallback) and returns to `Idle`.
///
/// [`submit`](Self::submit) runs all three in sequence.
pub struct TranscriptController<A>
where
    A: AnswerClient + ?Sized,
{
    client: Arc<A>,
    options: ControllerOptions,
    transcript: Transcript,
    state: ControllerState,
    input: String,
    scroll_anchor: MessageId,
    outstanding: Option<u64>,
}

impl<A> TranscriptController<A>
where
    A: AnswerClient + ?Sized,
{
    pub fn new(client: Arc<A>, options: ControllerOptions) -> Self {
        let transcript = Transcript::new(options.greeting.clone());
        let scroll_anchor = transcript.last().id;

        Self {
            client,
            options,
            transcript,
            state: ControllerState::Idle,
            input: String::new(),
            scroll_anchor,
            outstanding: None,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ControllerState::Submitting
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input buffer. Ignored while a request is outstanding,
    /// matching the disabled input box.
    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }
        self.input = text.into();
        true
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }

    /// Id of the message the view should keep scrolled into sight.
    pub fn scroll_anchor(&self) -> MessageId {
        self.scroll_anchor
    }

    pub fn begin(&mut self, text: &str) -> Option<PendingAsk<A>> {
        if self.is_loading() {
            tracing::debug!("Submission ignored: request already in flight");
            return None;
        }

        if text.trim().is_empty() {
            tracing::debug!("Submission ignored: empty input");
            return None;
        }

        tracing::debug!(chars = text.chars().count(), "Submitting question");

        self.append(MessageRole::User, text.to_string());
        self.input.clear();
        self.state = ControllerState::Submitting;

        let ticket = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        self.outstanding = Some(ticket);

        Some(PendingAsk {
            ticket,
            request: AskRequest::new(text, self.options.user_id.clone()),
            client: Arc::clone(&self.client),
        })
    }

    pub fn begin_input(&mut self) -> Option<PendingAsk<A>> {
        let text = self.input.clone();
        self.begin(&text)
    }

    /// Applies the outcome of the outstanding request. Returns false when the
    /// completion does not belong to it.
    pub fn finish(&mut self, completed: CompletedAsk) -> bool {
        if self.outstanding != Some(completed.ticket) {
            tracing::warn!(ticket = completed.ticket, "Ignoring stale completion");
            return false;
        }
        self.outstanding = None;

        let reply = reply_text(completed.outcome);
        self.append(MessageRole::Assistant, reply);
        self.state = ControllerState::Idle;

        true
    }

    pub async fn submit(&mut self, text: &str) -> bool {
        let Some(pending) = self.begin(text) else {
            return false;
        };
        let completed = pending.send().await;
        self.finish(completed)
    }

    pub async fn submit_input(&mut self) -> bool {
        let text = self.input.clone();
        self.submit(&text).await
    }

    fn append(&mut self, role: MessageRole, content: String) {
        self.scroll_anchor = self.transcript.push(role, content).id;
    }
}

fn reply_text(outcome: Result<AnswerPayload, AnswerClientError>) -> String {
    match outcome {
        Ok(payload) => {
            let answer = payload.answer_or(NO_ANSWER_FALLBACK);
            tracing::debug!(chars = answer.chars().count(), "Answer received");
            answer
        }
        Err(AnswerClientError::Status(status)) => {
            tracing::warn!(status, "Answer service returned a non-success status");
            STATUS_FAILURE_FALLBACK.to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Answer request failed");
            TRANSPORT_FAILURE_FALLBACK.to_string()
        }
    }
}

/// A request issued by [`TranscriptController::begin`], not yet sent.
pub struct PendingAsk<A>
where
    A: AnswerClient + ?Sized,
{
    ticket: u64,
    request: AskRequest,
    client: Arc<A>,
}

impl<A> PendingAsk<A>
where
    A: AnswerClient + ?Sized,
{
    pub async fn send(self) -> CompletedAsk {
        let outcome = self.client.ask(&self.request).await;
        CompletedAsk {
            ticket: self.ticket,
            outcome,
        }
    }
}

#[derive(Debug)]
pub struct CompletedAsk {
    ticket: u64,
    outcome: Result<AnswerPayload, AnswerClientError>,
}
