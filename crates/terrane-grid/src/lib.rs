//! Grid tiling for Terrane.
//!
//! This crate converts planar regions into sets of fixed-precision grid
//! cells and back. The grid itself sits behind the [`CellCodec`] trait;
//! [`Geohash`] is the shipped backend.
//!
//! # Operations
//!
//! - [`tile_polygon`]: flood-fill a region from its centroid cell, keeping
//!   cells the region contains ([`TileMode::Interior`]) or overlaps
//!   ([`TileMode::Covering`]).
//! - [`cell_to_polygon`] / [`cells_to_polygon`]: the inverse, up to grid
//!   resolution.
//!
//! ```
//! use geo::polygon;
//! use terrane_grid::{cells_to_polygon, tile_polygon, Geohash, TileMode};
//!
//! let triangle = polygon![
//!     (x: -99.1795917, y: 19.432134),
//!     (x: -99.1656847, y: 19.429034),
//!     (x: -99.1776492, y: 19.414236),
//! ];
//! let cells = tile_polygon(&Geohash, &triangle, 6, TileMode::Covering).unwrap();
//! let cover = cells_to_polygon(&Geohash, &cells).unwrap();
//! assert!(!cover.0.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assemble;
pub mod base32;
pub mod codec;
pub mod config;
pub mod error;
pub mod tiler;

#[cfg(test)]
pub(crate) mod compliance;

pub use assemble::{cell_to_polygon, cells_to_polygon};
pub use base32::Geohash;
pub use codec::{CellBounds, CellCodec, Neighbours};
pub use config::TileConfig;
pub use error::GridError;
pub use tiler::{tile_polygon, CellSet, Region, TileMode};
