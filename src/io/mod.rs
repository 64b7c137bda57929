//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Defaults and output constants
pub mod configuration;
/// Error types for generator operations
pub mod error;
/// Static reference notes written beside the output
pub mod info;
/// SVG file export
pub mod writer;
