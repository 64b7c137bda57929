//! Random palette selection
//!
//! The random source is injected rather than read from ambient global state,
//! so callers can pass an OS-seeded generator for everyday runs or a
//! fixed-seed generator for reproducible output.

use crate::palette::schemes::{BEVEL_PAIRS, BevelPair, COLOR_SCHEMES, ColorScheme};
use rand::Rng;
use rand::seq::IndexedRandom;

/// The colour choices for one generated document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Selected colour scheme, with tile/background possibly swapped
    pub scheme: ColorScheme,
    /// Selected shadow/highlight bevel pair
    pub bevel: BevelPair,
}

/// Draw one colour scheme and one bevel pair from the curated tables
///
/// Consumes exactly three draws from the random source, in a fixed order:
/// scheme choice, bevel pair choice, then a fair coin that swaps the scheme's
/// tile and background colours for variety.
pub fn select(rng: &mut impl Rng) -> Palette {
    let mut scheme = COLOR_SCHEMES.choose(rng).copied().unwrap_or(COLOR_SCHEMES[0]);
    let bevel = BEVEL_PAIRS.choose(rng).copied().unwrap_or(BEVEL_PAIRS[0]);

    if rng.random_bool(0.5) {
        std::mem::swap(&mut scheme.tile, &mut scheme.background);
    }

    Palette { scheme, bevel }
}
