use std::sync::Arc;

use crate::application::ports::AnswerClient;
use crate::application::services::{CompletedAsk, PendingAsk, TranscriptController};
use crate::infrastructure::answer::HttpAnswerClient;
use crate::presentation::config::AssistantSettings;

use super::ShellView;

pub const LAUNCHER_LABEL: &str = "Open AI Assistant";
pub const CLOSE_LABEL: &str = "Close chat";

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingView {
    pub open: bool,
    pub launcher_visible: bool,
    /// Accessible label of the launcher button, present while it is shown.
    pub launcher_label: Option<&'static str>,
    /// Label of the header close button, present while the sidebar is open.
    pub close_label: Option<&'static str>,
    pub scrim_visible: bool,
    pub shell: ShellView,
}

/// Collapsible overlay opened from a launcher button.
///
/// Visibility is independent of the conversation: closing the sidebar keeps
/// the transcript and any outstanding request untouched.
pub struct FloatingWidget<A>
where
    A: AnswerClient + ?Sized,
{
    controller: TranscriptController<A>,
    open: bool,
}

impl FloatingWidget<HttpAnswerClient> {
    pub fn connect(settings: &AssistantSettings) -> Self {
        let client = Arc::new(HttpAnswerClient::new(settings.endpoint.clone()));
        Self::new(TranscriptController::new(
            client,
            settings.controller_options(),
        ))
    }
}

impl<A> FloatingWidget<A>
where
    A: AnswerClient + ?Sized,
{
    pub fn new(controller: TranscriptController<A>) -> Self {
        Self {
            controller,
            open: false,
        }
    }

    pub fn controller(&self) -> &TranscriptController<A> {
        &self.controller
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Launcher and close button both land here.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::trace!(open = self.open, "Assistant widget toggled");
    }

    pub fn on_scrim_click(&mut self) {
        if self.open {
            self.toggle();
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        self.controller.set_input(text)
    }

    pub fn on_form_submit(&mut self) -> Option<PendingAsk<A>> {
        self.controller.begin_input()
    }

    pub fn complete(&mut self, completed: CompletedAsk) -> bool {
        self.controller.finish(completed)
    }

    pub async fn send(&mut self) -> bool {
        self.controller.submit_input().await
    }

    pub fn view(&self) -> FloatingView {
        FloatingView {
            open: self.open,
            launcher_visible: !self.open,
            launcher_label: (!self.open).then_some(LAUNCHER_LABEL),
            close_label: self.open.then_some(CLOSE_LABEL),
            scrim_visible: self.open,
            shell: ShellView::build(&self.controller, None),
        }
    }
}
