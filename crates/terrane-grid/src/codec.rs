//! The `CellCodec` trait and the [`CellBounds`] value it decodes to.

use crate::error::GridError;
use geo::{Coord, Polygon, Rect};
use smallvec::SmallVec;

/// Neighbour list returned by [`CellCodec::neighbours`].
///
/// Rectangular grids have at most eight neighbours, so the list never
/// spills to the heap.
pub type Neighbours = SmallVec<[String; 8]>;

/// Discrete planar grid addressed by string codes.
///
/// The tiler and the assembler only talk to the grid through this trait,
/// so any hierarchical rectangular cell scheme can back them. [`Geohash`]
/// is the shipped implementation.
///
/// [`Geohash`]: crate::Geohash
///
/// # Contract
///
/// - `decode(encode(p, n))` contains `p` for every valid point and precision.
/// - `b in neighbours(a)` implies `a in neighbours(b)`, away from the poles.
/// - Neighbours are returned in a deterministic, codec-defined order.
pub trait CellCodec: Send + Sync {
    /// Highest supported precision. Precisions start at 1.
    fn max_precision(&self) -> usize;

    /// Code of the cell at `precision` containing `point` (`x` = longitude,
    /// `y` = latitude).
    fn encode(&self, point: Coord<f64>, precision: usize) -> Result<String, GridError>;

    /// Bounds of the cell identified by `code`.
    fn decode(&self, code: &str) -> Result<CellBounds, GridError>;

    /// Codes of the cells adjacent to `code`, diagonals included.
    ///
    /// Directions that fall off the grid (past a pole) are omitted.
    fn neighbours(&self, code: &str) -> Result<Neighbours, GridError>;

    /// Check that `precision` is usable with this codec.
    fn check_precision(&self, precision: usize) -> Result<(), GridError> {
        let max = self.max_precision();
        if precision == 0 || precision > max {
            return Err(GridError::InvalidPrecision { precision, max });
        }
        Ok(())
    }
}

/// Decoded extent of a single cell.
///
/// Wraps the exact cell rectangle rather than a centre and offsets so that
/// adjacent cells share bit-identical edges when turned into polygons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBounds {
    rect: Rect<f64>,
}

impl CellBounds {
    /// Wrap a cell rectangle.
    pub fn new(rect: Rect<f64>) -> Self {
        Self { rect }
    }

    /// Centre of the cell.
    pub fn center(&self) -> Coord<f64> {
        self.rect.center()
    }

    /// Half the cell height, in degrees of latitude.
    pub fn lat_offset(&self) -> f64 {
        self.rect.height() / 2.0
    }

    /// Half the cell width, in degrees of longitude.
    pub fn lng_offset(&self) -> f64 {
        self.rect.width() / 2.0
    }

    /// The underlying rectangle.
    pub fn rect(&self) -> Rect<f64> {
        self.rect
    }

    /// Closed counter-clockwise polygon tracing the cell boundary,
    /// starting from the south-west corner.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.rect.to_polygon()
    }
}
