//! Tests for SVG file export

use beveltile::document::assembler::assemble;
use beveltile::geometry::layout::{GridConfig, derive};
use beveltile::palette::Palette;
use beveltile::palette::schemes::{BEVEL_PAIRS, COLOR_SCHEMES};
use beveltile::io::writer::export_document_as_svg;
use beveltile::tiles::classifier::classify;
use std::fs;
use tempfile::TempDir;

fn test_document() -> beveltile::document::Document {
    let config = GridConfig {
        grid: 6,
        cell: 32,
        size: 2048,
    };
    let palette = Palette {
        scheme: COLOR_SCHEMES[0],
        bevel: BEVEL_PAIRS[0],
    };
    assemble(config, derive(6, 32), &palette, &classify(6))
}

#[test]
fn test_export_writes_document_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("illusion.svg");
    let document = test_document();

    export_document_as_svg(&document, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), document.as_svg());
}

// Missing parent directories are created, matching the batch-output workflow
#[test]
fn test_export_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("nested/deeper/illusion.svg");

    export_document_as_svg(&test_document(), &output).unwrap();

    assert!(output.exists());
}

#[test]
fn test_export_to_unwritable_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "file, not a directory").unwrap();

    let output = blocker.join("illusion.svg");
    assert!(export_document_as_svg(&test_document(), &output).is_err());
}
