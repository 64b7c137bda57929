//! Per-state shadow and highlight polygon outlines
//!
//! Each tile's edge frame is traced by two adjacent, non-overlapping L-shaped
//! polygons outside the interior rectangle: a shadow bevel and a highlight
//! bevel. Which edges each polygon covers depends on the tile's bevel state,
//! giving the four rotational/mirrored variants of the raised-button look.

use crate::tiles::BevelState;

/// Corner points of one bevel polygon, in SVG drawing order
pub type Outline = [(usize, usize); 6];

/// Outline of the shadow bevel for a module anchored at `(ox, oy)`
///
/// `module_size` is the module edge length and `bevel` the bevel depth.
pub const fn shadow_outline(
    ox: usize,
    oy: usize,
    state: BevelState,
    module_size: usize,
    bevel: usize,
) -> Outline {
    let s = module_size;
    let b = bevel;
    let ib = s - b;

    match state {
        BevelState::A => [
            (ox, oy),
            (ox + b, oy + b),
            (ox + b, oy + ib),
            (ox + ib, oy + ib),
            (ox + s, oy + s),
            (ox, oy + s),
        ],
        BevelState::B => [
            (ox, oy + s),
            (ox + b, oy + ib),
            (ox + ib, oy + ib),
            (ox + ib, oy + b),
            (ox + s, oy),
            (ox + s, oy + s),
        ],
        BevelState::C => [
            (ox + s, oy + s),
            (ox + ib, oy + ib),
            (ox + ib, oy + b),
            (ox + b, oy + b),
            (ox, oy),
            (ox + s, oy),
        ],
        BevelState::D => [
            (ox + s, oy),
            (ox + ib, oy + b),
            (ox + b, oy + b),
            (ox + b, oy + ib),
            (ox, oy + s),
            (ox, oy),
        ],
    }
}

/// Outline of the highlight bevel for a module anchored at `(ox, oy)`
///
/// Covers exactly the edges the shadow bevel leaves open; the two polygons
/// meet along the module's diagonal seam.
pub const fn highlight_outline(
    ox: usize,
    oy: usize,
    state: BevelState,
    module_size: usize,
    bevel: usize,
) -> Outline {
    let s = module_size;
    let b = bevel;
    let ib = s - b;

    match state {
        BevelState::A => [
            (ox + s, oy),
            (ox, oy),
            (ox + b, oy + b),
            (ox + ib, oy + b),
            (ox + ib, oy + ib),
            (ox + s, oy + s),
        ],
        BevelState::B => [
            (ox, oy),
            (ox, oy + s),
            (ox + b, oy + ib),
            (ox + b, oy + b),
            (ox + ib, oy + b),
            (ox + s, oy),
        ],
        BevelState::C => [
            (ox, oy + s),
            (ox + s, oy + s),
            (ox + ib, oy + ib),
            (ox + b, oy + ib),
            (ox + b, oy + b),
            (ox, oy),
        ],
        BevelState::D => [
            (ox + s, oy + s),
            (ox + s, oy),
            (ox + ib, oy + b),
            (ox + ib, oy + ib),
            (ox + b, oy + ib),
            (ox, oy + s),
        ],
    }
}

/// Render an outline as an SVG `points` attribute value
pub fn points_attribute(outline: &Outline) -> String {
    outline
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}
