//! Polygon fixtures.

use geo::{polygon, Polygon};

/// A small triangle in central Mexico City, a few hundred metres across.
///
/// At geohash precision 7 it spans a few dozen cells, so both tiling modes
/// return non-trivial results.
pub fn triangle() -> Polygon<f64> {
    polygon![
        (x: -99.1795917, y: 19.432134),
        (x: -99.1656847, y: 19.429034),
        (x: -99.1776492, y: 19.414236),
    ]
}

/// Axis-aligned square with its lower-left corner at `(x, y)`.
pub fn square(x: f64, y: f64, side: f64) -> Polygon<f64> {
    polygon![
        (x: x, y: y),
        (x: x + side, y: y),
        (x: x + side, y: y + side),
        (x: x, y: y + side),
    ]
}
