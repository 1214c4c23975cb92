use book_assistant::infrastructure::observability::{TracingConfig, init_tracing};

#[test]
fn given_installed_subscriber_when_initializing_again_then_second_call_is_a_no_op() {
    let config = TracingConfig::new("Test", "debug", true);

    init_tracing(&config, 0);

    assert!(!init_tracing(&config, 0));
    assert!(!init_tracing(&TracingConfig::default(), 0));
}
