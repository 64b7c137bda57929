//! Checkerboard tile classification
//!
//! This module contains tile-related functionality including:
//! - Bevel orientation states
//! - Parity filtering and diagonal band classification

/// Tile classification over the checkerboard grid
pub mod classifier;

pub use classifier::{BevelState, Tile};
