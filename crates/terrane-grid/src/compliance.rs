//! CellCodec trait compliance test helpers.
//!
//! These functions verify that a codec satisfies the invariants the tiler
//! relies on. Callers pass the sample codes to probe since a geodesic grid
//! is too large to enumerate.

use crate::codec::CellCodec;
use geo::{Coord, Intersects, Point};
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(codec: &dyn CellCodec, code: &str) {
    for nb in codec.neighbours(code).expect("neighbours of sample code") {
        let back = codec.neighbours(&nb).expect("neighbours of neighbour");
        assert!(
            back.iter().any(|c| c == code),
            "neighbour symmetry violated: {nb} in N({code}) but {code} not in N({nb})"
        );
    }
}

/// Assert that neighbours are unique, distinct from the cell itself, and
/// share at least a corner with it.
pub fn assert_neighbours_adjacent(codec: &dyn CellCodec, code: &str) {
    let cell = codec.decode(code).expect("decode sample code").to_polygon();
    let neighbours = codec.neighbours(code).expect("neighbours of sample code");
    let unique: IndexSet<_> = neighbours.iter().collect();
    assert_eq!(unique.len(), neighbours.len(), "N({code}) has duplicates");
    for nb in &neighbours {
        assert_ne!(nb, code, "{code} lists itself as a neighbour");
        assert_eq!(nb.len(), code.len(), "{nb} has a different precision");
        let other = codec.decode(nb).expect("decode neighbour").to_polygon();
        assert!(cell.intersects(&other), "{nb} does not touch {code}");
    }
}

/// Assert that two calls to `neighbours` return the same sequence.
pub fn assert_neighbours_deterministic(codec: &dyn CellCodec, code: &str) {
    let a = codec.neighbours(code).expect("neighbours of sample code");
    let b = codec.neighbours(code).expect("neighbours of sample code");
    assert_eq!(a, b, "neighbours({code}) is non-deterministic");
}

/// Assert that re-encoding a cell's centre yields the same code.
pub fn assert_centre_round_trips(codec: &dyn CellCodec, code: &str) {
    let centre = codec.decode(code).expect("decode sample code").center();
    let again = codec.encode(centre, code.len()).expect("encode centre");
    assert_eq!(again, code, "centre of {code} encodes to {again}");
}

/// Assert that `decode(encode(p, precision))` contains `p`.
pub fn assert_encode_decode_contains(codec: &dyn CellCodec, p: Coord<f64>, precision: usize) {
    let code = codec.encode(p, precision).expect("encode point");
    let cell = codec.decode(&code).expect("decode code").to_polygon();
    assert!(
        cell.intersects(&Point::from(p)),
        "cell {code} does not contain ({}, {})",
        p.x,
        p.y
    );
}

/// Run every per-code check on each sample.
pub fn run_full_compliance(codec: &dyn CellCodec, samples: &[&str]) {
    for code in samples {
        assert_neighbours_symmetric(codec, code);
        assert_neighbours_adjacent(codec, code);
        assert_neighbours_deterministic(codec, code);
        assert_centre_round_trips(codec, code);
    }
}
