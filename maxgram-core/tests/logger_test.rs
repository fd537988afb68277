//! Integration test for [`maxgram_core::init_tracing`]. Lives in its own test binary because it
//! installs the global subscriber.

use maxgram_core::{init_tracing, LogConfig};

/// **Test: init creates the log file; a second init fails because the global subscriber is already set.**
#[test]
fn test_init_tracing_with_file() {
    let path = std::env::temp_dir().join(format!("maxgram-logger-test-{}.log", std::process::id()));
    let config = LogConfig {
        log_file: Some(path.to_string_lossy().into_owned()),
        default_level: "debug".to_string(),
    };

    init_tracing(&config).unwrap();
    tracing::info!(test = "logger", "step: logger initialized");

    assert!(path.exists());
    assert!(init_tracing(&LogConfig::default()).is_err());

    let _ = std::fs::remove_file(&path);
}
