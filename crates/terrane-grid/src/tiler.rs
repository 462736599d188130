//! Flood-fill tiling of a region into grid cells.
//!
//! The fill starts from the cell under the region's centroid and spreads
//! through neighbours, but only across cells that pass an envelope gate.
//! Each visited cell is classified on its own geometry alone, so the result
//! does not depend on visiting order.

use crate::codec::CellCodec;
use crate::error::GridError;
use geo::{BoundingRect, Centroid, Contains, Intersects, Point, Polygon, Rect};
use indexmap::IndexSet;
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

/// Set of cell codes produced by the tiler.
///
/// Equality ignores insertion order.
pub type CellSet = IndexSet<String>;

/// How a cell must relate to the region to be accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileMode {
    /// The region must contain the whole cell. The union of the result is
    /// a subset of the region.
    #[default]
    Interior,
    /// The cell only has to overlap the region. The union of the result is
    /// a superset of the region.
    Covering,
}

impl fmt::Display for TileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interior => write!(f, "interior"),
            Self::Covering => write!(f, "covering"),
        }
    }
}

/// Geometry that can be tiled.
///
/// Blanket-implemented for every `geo` type offering the predicates the
/// tiler needs, notably [`Polygon`].
pub trait Region:
    Centroid<Output = Option<Point<f64>>>
    + BoundingRect<f64>
    + Contains<Polygon<f64>>
    + Intersects<Polygon<f64>>
{
}

impl<T> Region for T where
    T: Centroid<Output = Option<Point<f64>>>
        + BoundingRect<f64>
        + Contains<Polygon<f64>>
        + Intersects<Polygon<f64>>
{
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Class {
    Accepted,
    Rejected,
    /// Failed the envelope gate: not part of the frontier.
    Outside,
}

fn classify<R: Region + ?Sized>(
    mode: TileMode,
    envelope: &Polygon<f64>,
    region: &R,
    cell: &Polygon<f64>,
) -> Class {
    let (gate, hit) = match mode {
        TileMode::Interior => (envelope.contains(cell), region.contains(cell)),
        TileMode::Covering => (envelope.intersects(cell), region.intersects(cell)),
    };
    match (gate, hit) {
        (false, _) => Class::Outside,
        (true, true) => Class::Accepted,
        (true, false) => Class::Rejected,
    }
}

/// Tile `region` into cells of the given precision.
///
/// In [`TileMode::Interior`] a region small enough to fit inside a single
/// cell would otherwise produce nothing; that case returns the one cell
/// holding the region instead.
///
/// # Errors
///
/// - [`GridError::InvalidPrecision`] if `precision` is not supported by
///   `codec`.
/// - [`GridError::EmptyRegion`] if the region has no centroid or envelope.
/// - [`GridError::Codec`] if the codec fails on a visited cell.
///
/// # Examples
///
/// ```
/// use terrane_grid::{cell_to_polygon, tile_polygon, Geohash, TileMode};
///
/// let cell = cell_to_polygon(&Geohash, "x1").unwrap();
/// let tiles = tile_polygon(&Geohash, &cell, 2, TileMode::Interior).unwrap();
/// assert_eq!(tiles.len(), 1);
/// assert!(tiles.contains("x1"));
/// ```
pub fn tile_polygon<C, R>(
    codec: &C,
    region: &R,
    precision: usize,
    mode: TileMode,
) -> Result<CellSet, GridError>
where
    C: CellCodec + ?Sized,
    R: Region + ?Sized,
{
    codec.check_precision(precision)?;
    let centroid = region.centroid().ok_or(GridError::EmptyRegion)?;
    let envelope: Option<Rect<f64>> = region.bounding_rect().into();
    let envelope = envelope.ok_or(GridError::EmptyRegion)?.to_polygon();

    let start = codec.encode(centroid.0, precision)?;
    debug!(%mode, precision, %start, "tiling region");

    let mut accepted = CellSet::new();
    let mut rejected: IndexSet<String> = IndexSet::new();
    let mut outside: IndexSet<String> = IndexSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(code) = queue.pop_front() {
        if accepted.contains(&code) || rejected.contains(&code) || outside.contains(&code) {
            continue;
        }
        let cell = codec.decode(&code)?.to_polygon();
        match classify(mode, &envelope, region, &cell) {
            Class::Outside => {
                outside.insert(code);
                continue;
            }
            Class::Accepted => {
                trace!(%code, "accepted");
                accepted.insert(code.clone());
            }
            Class::Rejected => {
                rejected.insert(code.clone());
            }
        }
        for nb in codec.neighbours(&code)? {
            if !accepted.contains(&nb) && !rejected.contains(&nb) {
                queue.push_back(nb);
            }
        }
    }

    if accepted.is_empty() && mode == TileMode::Interior {
        let start_cell = codec.decode(&start)?.to_polygon();
        if start_cell.contains(&envelope) {
            debug!(%start, "region fits inside a single cell");
            accepted.insert(start);
        }
    }

    debug!(
        %mode,
        precision,
        accepted = accepted.len(),
        rejected = rejected.len(),
        "tiling finished"
    );
    Ok(accepted)
}
