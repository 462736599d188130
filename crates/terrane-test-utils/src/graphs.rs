//! Weighted graph fixtures.
//!
//! Every fixture uses `&'static str` or `(usize, usize)` nodes and the
//! weight names `"time"` and `"distance"`.

use terrane_graph::WeightedGraph;

/// `a -> b -> c -> d -> e`, each hop costing 1 on `"time"` and 10 on
/// `"distance"`.
pub fn chain() -> WeightedGraph<&'static str> {
    let mut g = WeightedGraph::new();
    for (s, t) in [("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")] {
        g.add_edge(s, t, [("time", 1.0), ("distance", 10.0)])
            .expect("fixture weights are valid");
    }
    g
}

/// Two routes from `s` to `t`:
///
/// - `s -> fast -> t`: 1 + 1 time, 50 + 50 distance;
/// - `s -> short -> t`: 5 + 5 time, 10 + 10 distance.
pub fn diamond() -> WeightedGraph<&'static str> {
    let mut g = WeightedGraph::new();
    let edges = [
        ("s", "fast", 1.0, 50.0),
        ("fast", "t", 1.0, 50.0),
        ("s", "short", 5.0, 10.0),
        ("short", "t", 5.0, 10.0),
    ];
    for (s, t, time, distance) in edges {
        g.add_edge(s, t, [("time", time), ("distance", distance)])
            .expect("fixture weights are valid");
    }
    g
}

/// `rows x cols` street lattice with two-way edges between orthogonal
/// neighbours, each costing 1 on `"time"` and 100 on `"distance"`.
pub fn lattice(rows: usize, cols: usize) -> WeightedGraph<(usize, usize)> {
    let mut g = WeightedGraph::new();
    for r in 0..rows {
        for c in 0..cols {
            let mut link = |to: (usize, usize)| {
                let w = [("time", 1.0), ("distance", 100.0)];
                g.add_edge((r, c), to, w).expect("fixture weights are valid");
                g.add_edge(to, (r, c), w).expect("fixture weights are valid");
            };
            if c + 1 < cols {
                link((r, c + 1));
            }
            if r + 1 < rows {
                link((r + 1, c));
            }
        }
    }
    g
}

/// Two depots on a line, `d1 - x - y - z - d2`, with two-way edges.
///
/// Times: d1-x 1, x-y 1, y-z 1, z-d2 1, so `y` is equidistant from both
/// depots. Distances: every hop is 10 except `y-z`, which is 30.
pub fn two_depots() -> WeightedGraph<&'static str> {
    let mut g = WeightedGraph::new();
    let hops = [
        ("d1", "x", 1.0, 10.0),
        ("x", "y", 1.0, 10.0),
        ("y", "z", 1.0, 30.0),
        ("z", "d2", 1.0, 10.0),
    ];
    for (a, b, time, distance) in hops {
        let w = [("time", time), ("distance", distance)];
        g.add_edge(a, b, w).expect("fixture weights are valid");
        g.add_edge(b, a, w).expect("fixture weights are valid");
    }
    g
}
