//! Tiling configuration.

use crate::codec::CellCodec;
use crate::error::GridError;
use crate::tiler::{tile_polygon, CellSet, Region, TileMode};

/// Parameters for a tiling run.
///
/// Bundles precision and mode so callers can validate them once against a
/// codec and reuse them for many regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileConfig {
    /// Cell precision. Default: 7 (about 150 m cells for geohash).
    pub precision: usize,
    /// Acceptance rule. Default: [`TileMode::Interior`].
    pub mode: TileMode,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            precision: 7,
            mode: TileMode::Interior,
        }
    }
}

impl TileConfig {
    /// Check that the precision is supported by `codec`.
    pub fn validate<C: CellCodec + ?Sized>(&self, codec: &C) -> Result<(), GridError> {
        codec.check_precision(self.precision)
    }

    /// Tile `region` with these parameters.
    pub fn tile<C, R>(&self, codec: &C, region: &R) -> Result<CellSet, GridError>
    where
        C: CellCodec + ?Sized,
        R: Region + ?Sized,
    {
        tile_polygon(codec, region, self.precision, self.mode)
    }
}
