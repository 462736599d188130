//! Integration test: tiling and assembly against the geohash grid.
//!
//! Interior tiling must stay inside the region, covering tiling must
//! enclose it, and a region that is exactly one cell tiles to that cell.

use geo::{Area, Contains, CoordsIter, Intersects, Point};
use terrane_grid::{cell_to_polygon, cells_to_polygon, tile_polygon, Geohash, TileConfig, TileMode};
use terrane_test_utils::{square, triangle};

const EPS: f64 = 1e-12;

#[test]
fn triangle_interior_fits_inside() {
    let region = triangle();
    let cells = tile_polygon(&Geohash, &region, 7, TileMode::Interior).unwrap();
    assert!(!cells.is_empty());
    assert!(cells.iter().all(|c| c.len() == 7));
    for code in &cells {
        let cell = cell_to_polygon(&Geohash, code).unwrap();
        assert!(region.contains(&cell), "{code} leaks outside the triangle");
    }

    let inner = cells_to_polygon(&Geohash, &cells).unwrap();
    assert!(inner.unsigned_area() <= region.unsigned_area() + EPS);
    for coord in inner.exterior_coords_iter() {
        assert!(inner.intersects(&Point::from(coord)));
    }
}

#[test]
fn triangle_covering_encloses_it() {
    let region = triangle();
    let interior = tile_polygon(&Geohash, &region, 7, TileMode::Interior).unwrap();
    let covering = tile_polygon(&Geohash, &region, 7, TileMode::Covering).unwrap();
    assert!(covering.len() > interior.len());
    assert!(interior.iter().all(|c| covering.contains(c)));
    for code in &covering {
        let cell = cell_to_polygon(&Geohash, code).unwrap();
        assert!(region.intersects(&cell), "{code} does not touch the triangle");
    }

    let cover = cells_to_polygon(&Geohash, &covering).unwrap();
    assert!(cover.unsigned_area() + EPS >= region.unsigned_area());
    for coord in region.exterior_coords_iter() {
        assert!(cover.intersects(&Point::from(coord)));
    }
}

#[test]
fn single_cell_region_tiles_to_itself() {
    for code in ["x1", "9q8yy", "u4pruydq"] {
        let cell = cell_to_polygon(&Geohash, code).unwrap();
        let cells = tile_polygon(&Geohash, &cell, code.len(), TileMode::Interior).unwrap();
        assert_eq!(cells.len(), 1);
        assert!(cells.contains(code));

        let back = cells_to_polygon(&Geohash, &cells).unwrap();
        assert!((back.unsigned_area() - cell.unsigned_area()).abs() < EPS);
        assert!(back.intersects(&cell));
    }
}

#[test]
fn finer_precision_fills_more_of_the_region() {
    let region = triangle();
    let coarse = tile_polygon(&Geohash, &region, 6, TileMode::Interior).unwrap();
    let fine = tile_polygon(&Geohash, &region, 7, TileMode::Interior).unwrap();
    let coarse_area = cells_to_polygon(&Geohash, &coarse).unwrap().unsigned_area();
    let fine_area = cells_to_polygon(&Geohash, &fine).unwrap().unsigned_area();
    assert!(fine_area >= coarse_area);
}

#[test]
fn config_drives_tiling() {
    let region = square(-0.05, 51.45, 0.1);
    let config = TileConfig {
        precision: 5,
        mode: TileMode::Covering,
    };
    let via_config = config.tile(&Geohash, &region).unwrap();
    let direct = tile_polygon(&Geohash, &region, 5, TileMode::Covering).unwrap();
    assert_eq!(via_config, direct);
}
