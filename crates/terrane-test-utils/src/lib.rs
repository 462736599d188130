//! Shared fixtures for Terrane tests and benchmarks.
//!
//! - [`regions`]: polygons with known tiling behaviour.
//! - [`graphs`]: small weighted graphs with hand-checkable distances.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod graphs;
pub mod regions;

pub use graphs::{chain, diamond, lattice, two_depots};
pub use regions::{square, triangle};
