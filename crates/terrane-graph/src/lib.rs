//! Weighted directed graphs for Terrane.
//!
//! A [`WeightedGraph`] stores directed edges that each carry any number of
//! named, non-negative weights (`"time"`, `"distance"`, `"toll"`, ...).
//! On top of it this crate provides:
//!
//! - shortest-path costs under one weight ([`WeightedGraph::shortest_path_cost`],
//!   [`WeightedGraph::shortest_path_cost_astar`],
//!   [`WeightedGraph::shortest_path_tree`]);
//! - threshold-bounded territories ([`WeightedGraph::subset`]) and their
//!   disjoint split between competing sources
//!   ([`WeightedGraph::disjoint_subsets`]);
//! - CSV edge-list loading ([`WeightedGraph::from_csv_reader`]).
//!
//! ```
//! use indexmap::IndexSet;
//! use terrane_graph::{Thresholds, WeightedGraph};
//!
//! let mut g = WeightedGraph::new();
//! g.add_edge("depot", "a", [("time", 2.0)]).unwrap();
//! g.add_edge("a", "b", [("time", 2.0)]).unwrap();
//! g.add_edge("b", "c", [("time", 2.0)]).unwrap();
//!
//! let limits: Thresholds = [("time".to_string(), 4.0)].into_iter().collect();
//! let reach = g.subset(&"depot", &limits, &IndexSet::new()).unwrap();
//! assert_eq!(reach.len(), 3);
//! assert_eq!(reach[&"b"]["time"], 4.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod graph;
pub mod load;
pub mod path;
pub mod territory;

pub use config::PartitionConfig;
pub use error::{GraphError, LoadError};
pub use graph::{Node, WeightedGraph, Weights};
pub use load::EdgeColumns;
pub use territory::{Distances, ReachableSet, Territories, Thresholds};
