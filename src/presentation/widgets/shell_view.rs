use crate::application::ports::AnswerClient;
use crate::application::services::TranscriptController;
use crate::domain::{Message, MessageId, MessageRole};

pub const ASSISTANT_TITLE: &str = "Robotics AI Assistant";
pub const INPUT_PLACEHOLDER: &str = "Ask about robotics, AI, or book content...";

/// Keys the shells react to. Everything but Enter is left to the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: String,
    pub time: String,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            role: message.role,
            content: message.content.clone(),
            time: message.display_time(),
        }
    }
}

/// Render model shared by both shells.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellView {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub placeholder: &'static str,
    pub messages: Vec<MessageView>,
    pub typing_indicator: bool,
    pub input: String,
    pub input_enabled: bool,
    pub send_enabled: bool,
    pub scroll_anchor: MessageId,
}

impl ShellView {
    pub(super) fn build<A>(
        controller: &TranscriptController<A>,
        subtitle: Option<&'static str>,
    ) -> Self
    where
        A: AnswerClient + ?Sized,
    {
        Self {
            title: ASSISTANT_TITLE,
            subtitle,
            placeholder: INPUT_PLACEHOLDER,
            messages: controller
                .transcript()
                .iter()
                .map(MessageView::from)
                .collect(),
            typing_indicator: controller.is_loading(),
            input: controller.input().to_string(),
            input_enabled: !controller.is_loading(),
            send_enabled: controller.can_submit(),
            scroll_anchor: controller.scroll_anchor(),
        }
    }
}
