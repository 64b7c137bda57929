//! Kitaoka-style diagonal bevel optical illusion generator
//!
//! The system selects a random colour palette from curated tables, computes a
//! beveled tile layout over a checkerboard-parity grid, and serializes the
//! result as a single static SVG document.

#![forbid(unsafe_code)]

/// Document assembly and per-state bevel polygon geometry
pub mod document;
/// Derived pixel geometry for the tiled module
pub mod geometry;
/// Input/output operations, CLI surface, and error handling
pub mod io;
/// Curated colour tables and random palette selection
pub mod palette;
/// Checkerboard tile classification and diagonal bevel states
pub mod tiles;

pub use io::error::{GeneratorError, Result};
