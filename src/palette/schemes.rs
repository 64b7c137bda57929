//! Curated colour tables for tile, background, and bevel selection
//!
//! The tables are immutable static configuration data with no lifecycle
//! beyond process start. Colours are SVG hex strings.

/// A named tile/background colour pairing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    /// Human-readable scheme name, recorded in the document metadata comment
    pub name: &'static str,
    /// Fill colour for tile interiors
    pub tile: &'static str,
    /// Fill colour for the canvas background
    pub background: &'static str,
}

/// A shadow/highlight colour pairing for the bevel polygons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BevelPair {
    /// Fill colour for the shadow bevel polygon
    pub shadow: &'static str,
    /// Fill colour for the highlight bevel polygon
    pub highlight: &'static str,
}

/// Curated tile/background colour schemes
pub const COLOR_SCHEMES: [ColorScheme; 12] = [
    ColorScheme { name: "Green & Orange", tile: "#00a651", background: "#f7941d" },
    ColorScheme { name: "Blue & Yellow", tile: "#3366cc", background: "#ffcc00" },
    ColorScheme { name: "Red & Cyan", tile: "#cc3333", background: "#33cccc" },
    ColorScheme { name: "Magenta & Lime", tile: "#cc33aa", background: "#66cc33" },
    ColorScheme { name: "Purple & Gold", tile: "#6633cc", background: "#ffaa00" },
    ColorScheme { name: "Teal & Coral", tile: "#009999", background: "#ff6655" },
    ColorScheme { name: "Navy & Peach", tile: "#223366", background: "#ffaa88" },
    ColorScheme { name: "Forest & Rose", tile: "#336633", background: "#ff6688" },
    ColorScheme { name: "Indigo & Amber", tile: "#4433aa", background: "#ffbb33" },
    ColorScheme { name: "Wine & Mint", tile: "#882244", background: "#55ddaa" },
    ColorScheme { name: "Slate & Tangerine", tile: "#445566", background: "#ff8833" },
    ColorScheme { name: "Cobalt & Lemon", tile: "#0044aa", background: "#eedd33" },
];

/// Curated shadow/highlight bevel pairs
pub const BEVEL_PAIRS: [BevelPair; 4] = [
    BevelPair { shadow: "#000000", highlight: "#ffffff" },
    BevelPair { shadow: "#1a1a2e", highlight: "#f0ece2" },
    BevelPair { shadow: "#2d2d3d", highlight: "#e8e0d0" },
    BevelPair { shadow: "#0c0f38", highlight: "#f0d264" },
];
