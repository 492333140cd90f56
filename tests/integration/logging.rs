//! Integration test for file logging.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory of the log file (default "./logs")
//!   Refer to `src/logging/mod.rs` for more details.
use chrono::Utc;
use evm_gas_policies::logging::{dated_log_file_path, setup_logging};
use std::{env, path::Path, sync::Mutex};
use tempfile::TempDir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

// This integration test simulates file logging by setting file mode.
#[test]
fn test_setup_logging_file_mode_creates_log_file() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    // Create a unique temporary directory.
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path().to_str().unwrap();

    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", format!("{}/", temp_log_dir));

    setup_logging();

    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let expected_path =
        dated_log_file_path(&format!("{}/gas-policies.log", temp_log_dir), &date_str);
    assert!(
        Path::new(&expected_path).exists(),
        "Expected log file at {}",
        expected_path
    );

    env::remove_var("LOG_MODE");
    env::remove_var("LOG_LEVEL");
    env::remove_var("LOG_DATA_DIR");
}
