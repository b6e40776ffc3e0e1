pub mod fake_connector;
pub mod recording_notifier;

/// Logs appear only when you run with `-- --nocapture` or when a test fails.
pub fn init_test_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
