//! SVG file export

use crate::document::Document;
use crate::io::error::{GeneratorError, Result};
use std::path::Path;

/// Write the assembled document to `output_path`
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The document cannot be written to the given path
pub fn export_document_as_svg(document: &Document, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GeneratorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, document.as_svg()).map_err(|e| GeneratorError::DocumentExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
