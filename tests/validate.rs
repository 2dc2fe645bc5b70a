//! Integration tests for the `validate` command.
use footprint::cli::handle_validate_command;
use footprint::log::is_logger_initialised;
use footprint::settings::Settings;
use std::path::PathBuf;

/// Get the path to the example session.
fn get_session_dir() -> PathBuf {
    PathBuf::from("demos/household")
}

/// An integration test for the `validate` command.
///
/// We also check that the logger is initialised after it is run.
#[test]
fn test_handle_validate_command() {
    unsafe { std::env::set_var("FOOTPRINT_LOG_LEVEL", "off") };

    assert!(!is_logger_initialised());

    handle_validate_command(&get_session_dir(), Some(Settings::default())).unwrap();

    assert!(is_logger_initialised());
}
