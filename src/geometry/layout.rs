//! Grid configuration and derived module measurements
//!
//! All derivations are pure functions of the configuration. The geometry is
//! recomputed per run and never mutated.

/// Canvas and grid parameters supplied by the CLI
///
/// The CLI validates `grid` against the supported set and rejects
/// non-positive `cell` and `size` values. `grid * cell <= size` is expected
/// but not enforced here; oversized modules overflow the canvas and are the
/// caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of cells per module axis
    pub grid: usize,
    /// Cell edge length in pixels
    pub cell: usize,
    /// Canvas edge length in pixels
    pub size: usize,
}

/// Pixel measurements derived from the grid configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedGeometry {
    /// Edge length of the square tiled module, `grid * cell`
    pub module_size: usize,
    /// Bevel polygon depth and interior rectangle margin, equal to the cell size
    pub bevel: usize,
    /// Pixel offset between the first and last tile anchor along one axis
    pub step: usize,
}

/// Derive module size, bevel depth, and anchor step from the grid parameters
///
/// Pure and total over positive inputs; calling it twice with identical
/// arguments yields identical geometry.
pub const fn derive(grid: usize, cell: usize) -> DerivedGeometry {
    DerivedGeometry {
        module_size: grid * cell,
        bevel: cell,
        step: grid.saturating_sub(1) * cell,
    }
}

/// Offset that centres the tiled module within the square canvas
///
/// Saturates to zero when the module is larger than the canvas.
pub const fn centering_offset(canvas_size: usize, module_size: usize) -> usize {
    canvas_size.saturating_sub(module_size) / 2
}
