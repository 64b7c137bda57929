//! Tests for the idempotent reference notes writer

use beveltile::io::configuration::INFO_FILENAME;
use beveltile::io::info::write_reference_notes;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_notes_created_in_fresh_directory() {
    let temp_dir = TempDir::new().unwrap();

    let path = write_reference_notes(temp_dir.path()).unwrap();

    assert!(path.exists());
    assert_eq!(path.file_name().unwrap().to_str(), Some(INFO_FILENAME));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Kitaoka"));
    assert!(content.contains("AA BB CC DD"));
}

// A second run leaves the notes byte-identical
#[test]
fn test_notes_unmodified_on_second_run() {
    let temp_dir = TempDir::new().unwrap();

    let path = write_reference_notes(temp_dir.path()).unwrap();
    let first = fs::read(&path).unwrap();

    let path_again = write_reference_notes(temp_dir.path()).unwrap();
    let second = fs::read(&path_again).unwrap();

    assert_eq!(path, path_again);
    assert_eq!(first, second);
}

// An existing file is never overwritten, whatever its content
#[test]
fn test_existing_notes_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(INFO_FILENAME);
    fs::write(&path, "user annotations").unwrap();

    write_reference_notes(temp_dir.path()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "user annotations");
}

#[test]
fn test_missing_directory_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    assert!(write_reference_notes(&missing).is_err());
}
