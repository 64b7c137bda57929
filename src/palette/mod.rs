//! Colour palette selection for the illusion
//!
//! This module contains palette-related functionality including:
//! - Curated colour scheme and bevel pair tables
//! - Random selection with an injected random source

/// Curated colour tables
pub mod schemes;
/// Random palette selection
pub mod selector;

pub use schemes::{BevelPair, ColorScheme};
pub use selector::Palette;
