use std::sync::Arc;

use book_assistant::application::services::{ControllerOptions, TranscriptController};
use book_assistant::infrastructure::answer::ScriptedAnswerClient;
use book_assistant::presentation::widgets::{
    CLOSE_LABEL, FloatingWidget, InlinePanel, LAUNCHER_LABEL,
};

fn widget_with(client: ScriptedAnswerClient) -> FloatingWidget<ScriptedAnswerClient> {
    FloatingWidget::new(TranscriptController::new(
        Arc::new(client),
        ControllerOptions::default(),
    ))
}

fn contents(widget: &FloatingWidget<ScriptedAnswerClient>) -> Vec<String> {
    widget
        .controller()
        .transcript()
        .iter()
        .map(|m| m.content.clone())
        .collect()
}

#[test]
fn given_new_widget_when_viewed_then_closed_with_launcher_visible() {
    let widget = widget_with(ScriptedAnswerClient::default());

    let view = widget.view();

    assert!(!view.open);
    assert!(view.launcher_visible);
    assert_eq!(view.launcher_label, Some(LAUNCHER_LABEL));
    assert_eq!(view.launcher_label, Some("Open AI Assistant"));
    assert_eq!(view.close_label, None);
    assert!(!view.scrim_visible);
    assert_eq!(view.shell.messages.len(), 1);
}

#[test]
fn given_closed_widget_when_toggled_then_opens_and_shows_scrim() {
    let mut widget = widget_with(ScriptedAnswerClient::default());

    widget.toggle();

    let view = widget.view();
    assert!(view.open);
    assert!(!view.launcher_visible);
    assert_eq!(view.launcher_label, None);
    assert_eq!(view.close_label, Some(CLOSE_LABEL));
    assert_eq!(view.close_label, Some("Close chat"));
    assert!(view.scrim_visible);
}

#[test]
fn given_open_widget_when_scrim_clicked_then_closes() {
    let mut widget = widget_with(ScriptedAnswerClient::default());
    widget.toggle();

    widget.on_scrim_click();

    assert!(!widget.is_open());
}

#[test]
fn given_closed_widget_when_scrim_clicked_then_stays_closed() {
    let mut widget = widget_with(ScriptedAnswerClient::default());

    widget.on_scrim_click();

    assert!(!widget.is_open());
}

#[tokio::test]
async fn given_conversation_when_toggling_then_transcript_is_untouched() {
    let mut widget = widget_with(ScriptedAnswerClient::answering("Sure."));
    widget.toggle();
    widget.set_input("Can you help?");
    widget.send().await;
    let before = contents(&widget);

    for _ in 0..5 {
        widget.toggle();
        assert_eq!(contents(&widget), before);
    }
    widget.on_scrim_click();

    assert_eq!(contents(&widget), before);
    assert_eq!(before.len(), 3);
}

#[tokio::test]
async fn given_outstanding_request_when_closing_then_answer_still_lands_in_transcript() {
    let mut widget = widget_with(ScriptedAnswerClient::answering("Answered while closed."));
    widget.toggle();
    widget.set_input("Slow question");

    let pending = widget.on_form_submit().expect("accepted");
    widget.toggle();
    assert!(!widget.is_open());
    assert!(widget.view().shell.typing_indicator);

    let in_flight = tokio::spawn(pending.send());
    let completed = in_flight.await.unwrap();
    assert!(widget.complete(completed));

    widget.toggle();
    assert_eq!(widget.view().shell.messages.len(), 3);
    assert_eq!(
        widget.controller().transcript().last().content,
        "Answered while closed."
    );
}

#[tokio::test]
async fn given_panel_and_widget_on_same_page_when_used_then_transcripts_are_independent() {
    let mut widget = widget_with(ScriptedAnswerClient::answering("widget answer"));
    let mut panel = InlinePanel::new(TranscriptController::new(
        Arc::new(ScriptedAnswerClient::answering("panel answer")),
        ControllerOptions::default(),
    ));

    widget.set_input("asked in widget");
    widget.send().await;

    assert_eq!(widget.controller().transcript().len(), 3);
    assert_eq!(panel.controller().transcript().len(), 1);

    panel.set_input("asked in panel");
    panel.send().await;

    assert_eq!(panel.controller().transcript().last().content, "panel answer");
    assert_eq!(widget.controller().transcript().len(), 3);
}
