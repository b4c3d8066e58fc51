use sns_push_transport::setup_logging;

#[test]
fn test_logging_setup() {
    // Setting up the global subscriber must not panic on first use
    let result = std::panic::catch_unwind(|| {
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}
