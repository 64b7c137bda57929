//! Document assembly from palette, geometry, and classified tiles
//!
//! Emission order is fixed: XML declaration, svg root, metadata comment,
//! full-canvas background, then one render group per tile in the classifier's
//! z-order. Each group holds an interior rectangle and the two bevel
//! polygons.

use crate::document::bevel::{highlight_outline, points_attribute, shadow_outline};
use crate::geometry::layout::{DerivedGeometry, GridConfig, centering_offset};
use crate::palette::Palette;
use crate::tiles::Tile;

/// Assembled SVG artifact, built once and written once
#[derive(Clone, Debug)]
pub struct Document {
    svg: String,
    scheme_name: &'static str,
    tile_count: usize,
}

impl Document {
    /// Serialized SVG text
    pub fn as_svg(&self) -> &str {
        &self.svg
    }

    /// Name of the colour scheme recorded in the metadata comment
    pub const fn scheme_name(&self) -> &'static str {
        self.scheme_name
    }

    /// Number of tile render groups in the document
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }
}

// One render group: interior rectangle inset by the bevel depth, then the
// shadow and highlight L-bevels tracing the module's edge frame.
fn render_tile(
    lines: &mut Vec<String>,
    tile: &Tile,
    geometry: DerivedGeometry,
    offset: usize,
    palette: &Palette,
) {
    let ox = offset + tile.col * geometry.step;
    let oy = offset + tile.row * geometry.step;
    let interior = geometry.module_size - 2 * geometry.bevel;

    lines.push("  <g>".to_string());
    lines.push(format!(
        "    <rect fill=\"{}\" x=\"{}\" y=\"{}\" width=\"{interior}\" height=\"{interior}\"/>",
        palette.scheme.tile,
        ox + geometry.bevel,
        oy + geometry.bevel,
    ));
    lines.push(format!(
        "    <polygon fill=\"{}\" points=\"{}\"/>",
        palette.bevel.shadow,
        points_attribute(&shadow_outline(
            ox,
            oy,
            tile.state,
            geometry.module_size,
            geometry.bevel
        )),
    ));
    lines.push(format!(
        "    <polygon fill=\"{}\" points=\"{}\"/>",
        palette.bevel.highlight,
        points_attribute(&highlight_outline(
            ox,
            oy,
            tile.state,
            geometry.module_size,
            geometry.bevel
        )),
    ));
    lines.push("  </g>".to_string());
}

/// Assemble the complete SVG document
///
/// `tiles` must already be sorted by z-order, which `tiles::classifier`
/// guarantees; the assembler preserves the given order.
pub fn assemble(
    config: GridConfig,
    geometry: DerivedGeometry,
    palette: &Palette,
    tiles: &[Tile],
) -> Document {
    let offset = centering_offset(config.size, geometry.module_size);

    let mut lines = vec![
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string(),
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\">",
            size = config.size,
        ),
        format!(
            "  <!-- beveltile | scheme: {} | bevel: {}/{} | grid: {grid}x{grid} -->",
            palette.scheme.name,
            palette.bevel.shadow,
            palette.bevel.highlight,
            grid = config.grid,
        ),
        format!(
            "  <rect fill=\"{}\" width=\"{size}\" height=\"{size}\"/>",
            palette.scheme.background,
            size = config.size,
        ),
    ];

    for tile in tiles {
        render_tile(&mut lines, tile, geometry, offset, palette);
    }

    lines.push("</svg>".to_string());

    Document {
        svg: lines.join("\n"),
        scheme_name: palette.scheme.name,
        tile_count: tiles.len(),
    }
}
