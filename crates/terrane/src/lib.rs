//! Terrane: territories on grids and on weighted road graphs.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Terrane sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use terrane::prelude::*;
//! use geo::polygon;
//! use indexmap::IndexSet;
//!
//! // Grid side: cover a small triangle with precision-6 geohash cells.
//! let triangle = polygon![
//!     (x: -99.1795917, y: 19.432134),
//!     (x: -99.1656847, y: 19.429034),
//!     (x: -99.1776492, y: 19.414236),
//! ];
//! let config = TileConfig { precision: 6, mode: TileMode::Covering };
//! let cells = config.tile(&Geohash, &triangle).unwrap();
//! let outline = cells_to_polygon(&Geohash, &cells).unwrap();
//! assert!(!outline.0.is_empty());
//!
//! // Graph side: split a street between two depots.
//! let mut g = WeightedGraph::new();
//! for (a, b) in [("d1", "x"), ("x", "y"), ("y", "d2")] {
//!     g.add_edge(a, b, [("time", 1.0)]).unwrap();
//!     g.add_edge(b, a, [("time", 1.0)]).unwrap();
//! }
//! let limit: Thresholds = [("time".to_string(), 2.0)].into_iter().collect();
//! let parts = g
//!     .disjoint_subsets(&["d1", "d2"], &limit, "time", &IndexSet::new())
//!     .unwrap();
//! assert!(parts[&"d1"].contains_key(&"x"));
//! assert!(parts[&"d2"].contains_key(&"y"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `terrane-grid` | Cell codecs, polygon tiling, cell-set assembly |
//! | [`graph`] | `terrane-graph` | Weighted graph, shortest paths, territories, CSV loading |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid cells and polygon tiling (`terrane-grid`).
///
/// Provides the [`grid::CellCodec`] trait, the [`grid::Geohash`] backend,
/// [`grid::tile_polygon`] and [`grid::cells_to_polygon`].
pub use terrane_grid as grid;

/// Weighted directed graphs (`terrane-graph`).
///
/// [`graph::WeightedGraph`] with shortest-path queries, threshold
/// territories and CSV loading.
pub use terrane_graph as graph;

/// Common imports for typical Terrane usage.
///
/// ```rust
/// use terrane::prelude::*;
/// ```
pub mod prelude {
    // Grid
    pub use terrane_grid::{
        cell_to_polygon, cells_to_polygon, tile_polygon, CellCodec, CellSet, Geohash, TileConfig,
        TileMode,
    };

    // Graph
    pub use terrane_graph::{
        EdgeColumns, PartitionConfig, ReachableSet, Territories, Thresholds, WeightedGraph,
    };

    // Errors
    pub use terrane_graph::{GraphError, LoadError};
    pub use terrane_grid::GridError;
}
