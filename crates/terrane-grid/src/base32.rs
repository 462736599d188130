//! Base-32 geohash backend for [`CellCodec`].

use crate::codec::{CellBounds, CellCodec, Neighbours};
use crate::error::GridError;
use geo::Coord;
use geohash::Direction;
use tracing::trace;

/// Geohash grid: each extra character splits a cell into 32 children.
///
/// Neighbours come back in the order N, NE, E, SE, S, SW, W, NW. Cells on
/// the polar rows have fewer than eight neighbours.
///
/// # Examples
///
/// ```
/// use terrane_grid::{CellCodec, Geohash};
///
/// let codec = Geohash;
/// let bounds = codec.decode("9q8yy").unwrap();
/// let code = codec.encode(bounds.center(), 5).unwrap();
/// assert_eq!(code, "9q8yy");
/// assert_eq!(codec.neighbours("9q8yy").unwrap().len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Geohash;

impl Geohash {
    /// Longest code the backend produces.
    pub const MAX_PRECISION: usize = 12;

    const DIRECTIONS: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];
}

fn codec_error(input: impl Into<String>, err: geohash::GeohashError) -> GridError {
    let input = input.into();
    trace!(%input, %err, "geohash rejected input");
    GridError::Codec {
        input,
        reason: err.to_string(),
    }
}

impl CellCodec for Geohash {
    fn max_precision(&self) -> usize {
        Self::MAX_PRECISION
    }

    fn encode(&self, point: Coord<f64>, precision: usize) -> Result<String, GridError> {
        self.check_precision(precision)?;
        geohash::encode(point, precision)
            .map_err(|e| codec_error(format!("({}, {})", point.x, point.y), e))
    }

    fn decode(&self, code: &str) -> Result<CellBounds, GridError> {
        if code.is_empty() || code.len() > Self::MAX_PRECISION {
            return Err(GridError::Codec {
                input: code.to_string(),
                reason: format!("length must be in [1, {}]", Self::MAX_PRECISION),
            });
        }
        geohash::decode_bbox(code)
            .map(CellBounds::new)
            .map_err(|e| codec_error(code, e))
    }

    fn neighbours(&self, code: &str) -> Result<Neighbours, GridError> {
        // Validate up front so that a bad code is an error rather than an
        // empty neighbourhood.
        self.decode(code)?;
        Ok(Self::DIRECTIONS
            .iter()
            .filter_map(|&dir| geohash::neighbor(code, dir).ok())
            .collect())
    }
}
