//! Tests for error construction and display formatting

use beveltile::GeneratorError;
use beveltile::io::error::invalid_parameter;
use std::error::Error;
use std::path::PathBuf;

#[test]
fn test_invalid_parameter_display() {
    let error = invalid_parameter("grid", &7, &"grid size must be one of [6, 8, 10, 12, 16]");
    assert_eq!(
        error.to_string(),
        "Invalid parameter 'grid' = '7': grid size must be one of [6, 8, 10, 12, 16]"
    );
}

#[test]
fn test_document_export_display_includes_path() {
    let error = GeneratorError::DocumentExport {
        path: PathBuf::from("out/illusion.svg"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };

    let message = error.to_string();
    assert!(message.contains("out/illusion.svg"));
    assert!(message.contains("denied"));
}

#[test]
fn test_file_system_display_includes_operation() {
    let error = GeneratorError::FileSystem {
        path: PathBuf::from("out"),
        operation: "create directory",
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };

    assert!(error.to_string().contains("create directory"));
}

// I/O errors convert into the generic file system variant
#[test]
fn test_from_io_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = GeneratorError::from(io_error);

    assert!(matches!(error, GeneratorError::FileSystem { .. }));
    assert!(error.source().is_some());
}

#[test]
fn test_invalid_parameter_has_no_source() {
    let error = invalid_parameter("cell", &0, &"value must be positive");
    assert!(error.source().is_none());
}
