//! Pixel geometry derived from the grid configuration

/// Grid configuration and derived module measurements
pub mod layout;

pub use layout::{DerivedGeometry, GridConfig};
