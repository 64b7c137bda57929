//! Tile classification over the checkerboard grid
//!
//! Only cells with even row+col parity become tiles. Each tile is assigned
//! one of four bevel orientation states from its diagonal band, so the
//! orientation shifts every two tiles along a diagonal (the AA BB CC DD
//! sequence that drives the illusion), plus a deterministic draw-order key.

/// Bevel orientation of a tile
///
/// Each state selects which two adjacent polygon edges receive the shadow
/// bevel versus the highlight bevel, producing the four rotational/mirrored
/// bevel variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BevelState {
    /// Shadow along the left and bottom edges
    A,
    /// Shadow along the bottom and right edges
    B,
    /// Shadow along the right and top edges
    C,
    /// Shadow along the top and left edges
    D,
}

impl BevelState {
    /// Map a diagonal band offset to its bevel orientation
    ///
    /// Total over offsets 0..4; larger offsets wrap modulo 4.
    pub const fn from_offset(offset: usize) -> Self {
        match offset % 4 {
            0 => Self::A,
            1 => Self::B,
            2 => Self::C,
            _ => Self::D,
        }
    }
}

/// One beveled tile at a checkerboard-parity grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Row index in `[0, grid)`
    pub row: usize,
    /// Column index in `[0, grid)`
    pub col: usize,
    /// Bevel orientation for this tile's diagonal band
    pub state: BevelState,
    /// Row-major draw-order key, `row * grid + col`
    pub z_order: usize,
}

// Bands are four cells wide along the main diagonal; the +2 bias centres the
// first band on the origin so orientation repeats in an AA BB CC DD sequence.
fn diagonal_offset(row: usize, col: usize) -> usize {
    let d = col as i64 - row as i64;
    ((d + 2).div_euclid(4)).rem_euclid(4) as usize
}

/// Classify every even-parity cell of the grid into a beveled tile
///
/// Returns `ceil(grid^2 / 2)` tiles sorted ascending by `z_order`, the one
/// ordering guarantee the document assembler relies on for deterministic
/// visual stacking.
pub fn classify(grid: usize) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity((grid * grid).div_ceil(2));

    for row in 0..grid {
        for col in 0..grid {
            if (row + col) % 2 != 0 {
                continue;
            }
            tiles.push(Tile {
                row,
                col,
                state: BevelState::from_offset(diagonal_offset(row, col)),
                z_order: row * grid + col,
            });
        }
    }

    tiles.sort_by_key(|tile| tile.z_order);
    tiles
}
