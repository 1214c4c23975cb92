use std::sync::Arc;

use crate::application::ports::AnswerClient;
use crate::application::services::{CompletedAsk, PendingAsk, TranscriptController};
use crate::infrastructure::answer::HttpAnswerClient;
use crate::presentation::config::AssistantSettings;

use super::{Key, ShellView};

pub const PANEL_SUBTITLE: &str = "Ask questions about Physical AI & Humanoid Robotics";

/// Always-visible assistant embedded in a page.
pub struct InlinePanel<A>
where
    A: AnswerClient + ?Sized,
{
    controller: TranscriptController<A>,
}

impl InlinePanel<HttpAnswerClient> {
    pub fn connect(settings: &AssistantSettings) -> Self {
        let client = Arc::new(HttpAnswerClient::new(settings.endpoint.clone()));
        Self::new(TranscriptController::new(
            client,
            settings.controller_options(),
        ))
    }
}

impl<A> InlinePanel<A>
where
    A: AnswerClient + ?Sized,
{
    pub fn new(controller: TranscriptController<A>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &TranscriptController<A> {
        &self.controller
    }

    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        self.controller.set_input(text)
    }

    pub fn on_form_submit(&mut self) -> Option<PendingAsk<A>> {
        self.controller.begin_input()
    }

    /// Enter submits like the form does. A native submit firing for the same
    /// keypress finds the controller busy and does nothing.
    pub fn on_key(&mut self, key: Key) -> Option<PendingAsk<A>> {
        match key {
            Key::Enter => self.controller.begin_input(),
            Key::Other => None,
        }
    }

    pub fn complete(&mut self, completed: CompletedAsk) -> bool {
        self.controller.finish(completed)
    }

    /// Submits the current input and waits for the answer.
    pub async fn send(&mut self) -> bool {
        self.controller.submit_input().await
    }

    pub fn view(&self) -> ShellView {
        ShellView::build(&self.controller, Some(PANEL_SUBTITLE))
    }
}
