//! Unit tests for domain error types

use autosave_domain::Error;

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("Draft key cannot be empty");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "Draft key cannot be empty"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_storage_error_display() {
    let error = Error::storage("quota exceeded");
    assert!(matches!(error, Error::StorageUnavailable { .. }));
    assert_eq!(format!("{}", error), "Storage unavailable: quota exceeded");
}

#[test]
fn test_storage_error_keeps_source() {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let error = Error::storage_with_source("Failed to write draft", source);
    assert!(std::error::Error::source(&error).is_some());
    assert!(Error::storage("quota exceeded").to_string().contains("quota"));
    assert!(std::error::Error::source(&Error::storage("quota exceeded")).is_none());
}

#[test]
fn test_serde_errors_are_distinct() {
    assert!(matches!(
        Error::deserialization("bad json"),
        Error::Deserialization { .. }
    ));
    assert!(matches!(
        Error::serialization("unsupported value"),
        Error::Serialization { .. }
    ));
}

#[test]
fn test_config_error_display() {
    let error = Error::config("interval cannot be 0");
    assert_eq!(
        format!("{}", error),
        "Configuration error: interval cannot be 0"
    );
}
