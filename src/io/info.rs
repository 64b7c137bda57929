//! Static reference notes written beside the output
//!
//! A short plain-text explainer of the illusion, written once per output
//! directory. Re-runs leave an existing file untouched so the notes stay
//! byte-identical across generations.

use crate::io::configuration::INFO_FILENAME;
use crate::io::error::{GeneratorError, Result};
use std::path::{Path, PathBuf};

const REFERENCE_NOTES: &str = "\
Kitaoka Illusion - Quick Facts
==============================

What is this?
  This is a variant of the \"optical illusion of diagonal beveled tiles\"
  popularised by Professor Akiyoshi Kitaoka of Ritsumeikan University, Japan.
  The perfectly straight diagonal lines appear to curve or tilt because of the
  asymmetric light/shadow bevels that rotate in an AA BB CC DD sequence.

How does it work?
  Each square tile has a raised-button bevel (shadow on one side, highlight
  on the other). When the bevel direction shifts every two tiles along a
  diagonal, your brain interprets the straight lines as bending. The
  checkerboard colouring amplifies the effect.

Who is Akiyoshi Kitaoka?
  A Japanese Professor of Psychology at Ritsumeikan University, Kyoto.
  He is one of the world's leading researchers on visual illusions and has
  created hundreds of remarkable optical illusion designs.
";

/// Write the reference notes into `directory` if not already present
///
/// Returns the path to the notes file. The write is idempotent: an existing
/// file is never overwritten, whatever its content.
///
/// # Errors
///
/// Returns an error if the notes file cannot be created.
pub fn write_reference_notes(directory: &Path) -> Result<PathBuf> {
    let path = directory.join(INFO_FILENAME);

    if !path.exists() {
        std::fs::write(&path, REFERENCE_NOTES).map_err(|e| GeneratorError::FileSystem {
            path: path.clone(),
            operation: "write reference notes",
            source: e,
        })?;
    }

    Ok(path)
}
