mod transcript_controller;

pub use transcript_controller::{
    CompletedAsk, ControllerOptions, ControllerState, DEFAULT_GREETING, NO_ANSWER_FALLBACK,
    PendingAsk, STATUS_FAILURE_FALLBACK, TRANSPORT_FAILURE_FALLBACK, TranscriptController,
};
