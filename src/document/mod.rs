//! SVG document assembly
//!
//! This module contains document-related functionality including:
//! - Per-state bevel polygon outlines
//! - Ordered document assembly and serialization

/// Document assembly from palette, geometry, and classified tiles
pub mod assembler;
/// Per-state shadow and highlight polygon outlines
pub mod bevel;

pub use assembler::Document;
