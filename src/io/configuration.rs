//! Defaults and output constants

/// Grid sizes accepted by the CLI
pub const SUPPORTED_GRIDS: [usize; 5] = [6, 8, 10, 12, 16];

/// Default module grid size
pub const DEFAULT_GRID: usize = 8;

/// Default canvas edge length in pixels
pub const DEFAULT_CANVAS_SIZE: usize = 3584;

/// Default cell edge length in pixels
pub const DEFAULT_CELL_SIZE: usize = 32;

// Output settings
/// Prefix for auto-generated output filenames
pub const OUTPUT_PREFIX: &str = "illusion";

/// Filename of the reference notes written beside the output
pub const INFO_FILENAME: &str = "kitaoka_illusion_info.txt";
