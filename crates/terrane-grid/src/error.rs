//! Error types for cell encoding, tiling and assembly.

use std::fmt;

/// Errors arising from the cell codec or from tiling a region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The requested precision is outside the codec's supported range.
    InvalidPrecision {
        /// The precision that was requested.
        precision: usize,
        /// Highest precision the codec supports (lowest is always 1).
        max: usize,
    },
    /// The region has no centroid or envelope (empty geometry).
    EmptyRegion,
    /// The codec rejected a code or a coordinate.
    Codec {
        /// The code or coordinate being processed when the codec failed.
        input: String,
        /// Description reported by the codec.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrecision { precision, max } => {
                write!(f, "precision {precision} outside supported range [1, {max}]")
            }
            Self::EmptyRegion => write!(f, "region is empty"),
            Self::Codec { input, reason } => write!(f, "codec failed on '{input}': {reason}"),
        }
    }
}

impl std::error::Error for GridError {}
