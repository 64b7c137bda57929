//! Tests for derived geometry calculations

use beveltile::geometry::layout::{centering_offset, derive};

// Scenario from the generator's documented defaults: a 6x6 grid of 32px cells
#[test]
fn test_derive_small_grid() {
    let geometry = derive(6, 32);

    assert_eq!(geometry.module_size, 192);
    assert_eq!(geometry.bevel, 32);
    assert_eq!(geometry.step, 160);
}

#[test]
fn test_derive_default_grid() {
    let geometry = derive(8, 32);

    assert_eq!(geometry.module_size, 256);
    assert_eq!(geometry.bevel, 32);
    assert_eq!(geometry.step, 224);
}

// derive is pure: identical inputs always yield identical geometry
#[test]
fn test_derive_is_pure() {
    assert_eq!(derive(12, 16), derive(12, 16));
    assert_eq!(derive(16, 32), derive(16, 32));
}

#[test]
fn test_bevel_always_equals_cell() {
    for cell in [1, 8, 32, 100] {
        assert_eq!(derive(10, cell).bevel, cell);
    }
}

// Default canvas with the default grid centres the module at 1664px
#[test]
fn test_centering_offset_default_canvas() {
    assert_eq!(centering_offset(3584, 256), 1664);
}

#[test]
fn test_centering_offset_exact_fit() {
    assert_eq!(centering_offset(192, 192), 0);
}

// Oversized modules are a caller responsibility; the offset saturates rather
// than underflowing
#[test]
fn test_centering_offset_oversized_module() {
    assert_eq!(centering_offset(100, 500), 0);
}
