//! Error type tests
//!
//! Tests for KickstartError enum and its conversions.

#![allow(clippy::expect_used)]

use crate::error::KickstartError;
use crate::error::brew::{command_failed, not_installed};
use crate::error::config::{not_found as config_not_found, parse_failed, read_failed};
use crate::error::package::invalid_name;
use crate::error::prompt::failed as prompt_failed;
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = KickstartError::InvalidPackageName {
        name: "bad name".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid package name: 'bad name'");
}

#[test]
fn test_error_code() {
    let err = not_installed("brew");
    assert_eq!(
        err.code()
            .map(|c: Box<dyn std::fmt::Display>| c.to_string()),
        Some("kickstart::brew::not_installed".to_string())
    );
}

#[test]
fn test_error_help_present_for_config_not_found() {
    let err = config_not_found("/nope/kickstart.yaml");
    assert!(err.help().is_some());
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: KickstartError = io_err.into();
    assert!(matches!(err, KickstartError::IoError { .. }));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{oops")
        .expect_err("malformed JSON should not parse");
    let err: KickstartError = json_err.into();
    assert!(matches!(err, KickstartError::OutdatedParseFailed { .. }));
}

#[test]
fn test_inquire_error_conversion() {
    let err: KickstartError = inquire::InquireError::OperationInterrupted.into();
    assert!(matches!(err, KickstartError::PromptFailed { .. }));
    assert!(err.to_string().contains("Failed to read confirmation"));
}

test_error_contains!(
    test_command_failed_message,
    command_failed("brew update", "exit status: 1"),
    "brew update",
    "exit status: 1"
);

test_error_contains!(
    test_config_parse_failed_message,
    parse_failed("/etc/kickstart.yaml", "unknown field `pkgs`"),
    "Failed to parse configuration file",
    "unknown field"
);

test_error_contains!(
    test_config_read_failed_message,
    read_failed("/etc/kickstart.yaml", "permission denied"),
    "Failed to read configuration file"
);

test_error_contains!(
    test_invalid_name_message,
    invalid_name(""),
    "Invalid package name"
);

test_error_contains!(
    test_prompt_failed_message,
    prompt_failed("interrupted"),
    "Prompt failed",
    "interrupted"
);
