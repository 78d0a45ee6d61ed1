use tapfield::adapters::outbound::{init_file_logger, init_tracing};

// Both backends are process-global, so this binary holds a single test.
#[test]
fn test_file_logger_installs_after_tracing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.log");
    let path = path.to_str().unwrap();

    init_tracing().unwrap();
    tracing::info!("tracing subscriber ready");

    let logger = init_file_logger(path, log::LevelFilter::Info);
    assert!(logger.is_ok(), "{:?}", logger.err().map(|e| e.to_string()));
    logger.unwrap().info("file sink ready");
    assert!(std::path::Path::new(path).exists());
}
