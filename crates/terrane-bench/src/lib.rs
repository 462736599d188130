//! Benchmark workloads for Terrane.
//!
//! Every profile is deterministic in its seed:
//!
//! - [`road_network`]: a perturbed street lattice with `"time"` and
//!   `"distance"` weights.
//! - [`depots`]: distinct source nodes on that lattice.
//! - [`district`]: an irregular polygon a few kilometres across.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use geo::{Coord, LineString, Polygon};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use terrane_graph::{Thresholds, WeightedGraph};

/// Street lattice of `side * side` intersections.
///
/// Orthogonal neighbours are linked in both directions with random
/// weights (`time` in `[1, 5)`, `distance` in `[50, 200)`). About one
/// link in ten is one-way, which keeps the graph directed in a way that
/// matters for reachability.
pub fn road_network(side: u32, seed: u64) -> WeightedGraph<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut g = WeightedGraph::new();
    let id = |r: u32, c: u32| r * side + c;

    for r in 0..side {
        for c in 0..side {
            let mut targets = Vec::with_capacity(2);
            if c + 1 < side {
                targets.push(id(r, c + 1));
            }
            if r + 1 < side {
                targets.push(id(r + 1, c));
            }
            for to in targets {
                let from = id(r, c);
                let time = rng.gen_range(1.0..5.0);
                let distance = rng.gen_range(50.0..200.0);
                let weights = [("time", time), ("distance", distance)];
                let one_way = rng.gen_bool(0.1);
                let (a, b) = if rng.gen_bool(0.5) { (from, to) } else { (to, from) };
                g.add_edge(a, b, weights).expect("sampled weights are valid");
                if !one_way {
                    g.add_edge(b, a, weights).expect("sampled weights are valid");
                }
            }
        }
    }
    g
}

/// `n` distinct intersections of a [`road_network`] with the same `side`.
///
/// Returns fewer than `n` only when the lattice has fewer nodes.
pub fn depots(side: u32, n: usize, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);
    let total = (side * side) as usize;
    let mut picked = indexmap::IndexSet::with_capacity(n.min(total));
    while picked.len() < n.min(total) {
        picked.insert(rng.gen_range(0..side * side));
    }
    picked.into_iter().collect()
}

/// A `"time"` limit for [`road_network`] territories.
pub fn time_limit(limit: f64) -> Thresholds {
    [("time".to_string(), limit)].into_iter().collect()
}

/// Irregular star-shaped district centred on central London.
///
/// `vertices` points at evenly spaced bearings, each at a random radius
/// between 0.6 and 1.0 of `radius_deg`.
pub fn district(vertices: usize, radius_deg: f64, seed: u64) -> Polygon<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let centre = Coord {
        x: -0.1276,
        y: 51.5072,
    };
    let n = vertices.max(3);
    let ring: Vec<Coord<f64>> = (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64;
            let r = radius_deg * rng.gen_range(0.6..1.0);
            Coord {
                x: centre.x + r * angle.cos(),
                y: centre.y + r * angle.sin(),
            }
        })
        .collect();
    Polygon::new(LineString::new(ring), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, Centroid, Contains};

    #[test]
    fn road_network_is_deterministic() {
        let a = road_network(8, 7);
        let b = road_network(8, 7);
        assert_eq!(a, b);
        assert_eq!(a.node_count(), 64);
        assert!(a.edge_count() >= 2 * 7 * 8);
    }

    #[test]
    fn depots_are_distinct_and_bounded() {
        let d = depots(5, 10, 1);
        assert_eq!(d.len(), 10);
        let unique: std::collections::HashSet<_> = d.iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(d.iter().all(|&n| n < 25));
        assert_eq!(depots(2, 10, 1).len(), 4);
    }

    #[test]
    fn district_is_a_proper_region() {
        let p = district(24, 0.02, 3);
        assert!(p.unsigned_area() > 0.0);
        let c = p.centroid().unwrap();
        assert!(p.contains(&c));
        assert_eq!(p, district(24, 0.02, 3));
    }

    #[test]
    fn territories_run_on_profiles() {
        let g = road_network(10, 11);
        let sources = depots(10, 3, 11);
        let t = time_limit(8.0);
        let out = g
            .disjoint_subsets(&sources, &t, "time", &indexmap::IndexSet::new())
            .unwrap();
        assert_eq!(out.len(), 3);
    }
}
