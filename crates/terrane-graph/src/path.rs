//! Shortest-path queries over one named weight.
//!
//! A query only traverses edges that carry the requested weight; an edge
//! without it is treated as absent. Unreachable targets cost
//! `f64::INFINITY`, which is a value and never an error.

use crate::error::GraphError;
use crate::graph::{Node, WeightedGraph};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use pathfinding::prelude::{astar, dijkstra, dijkstra_all};
use tracing::trace;

type Cost = OrderedFloat<f64>;

impl<N: Node> WeightedGraph<N> {
    fn require_weight(&self, weight: &str) -> Result<(), GraphError> {
        if self.has_weight(weight) {
            return Ok(());
        }
        Err(GraphError::UnknownWeight {
            weight: weight.to_string(),
            known: self.weight_names().map(str::to_string).collect(),
        })
    }

    fn weighted_successors(&self, node: &N, weight: &str) -> Vec<(N, Cost)> {
        self.successors(node)
            .filter_map(|(next, weights)| {
                weights
                    .get(weight)
                    .map(|&cost| (next.clone(), OrderedFloat(cost)))
            })
            .collect()
    }

    /// Minimum total `weight` along any directed path from `source` to
    /// `target` (Dijkstra).
    ///
    /// Returns `0.0` when `source == target` and the node is in the graph,
    /// and `f64::INFINITY` when no path exists or either endpoint is not in
    /// the graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownWeight`] if no edge carries `weight`.
    pub fn shortest_path_cost(&self, source: &N, target: &N, weight: &str) -> Result<f64, GraphError> {
        self.require_weight(weight)?;
        if !self.contains_node(source) || !self.contains_node(target) {
            return Ok(f64::INFINITY);
        }
        let found = dijkstra(
            source,
            |n| self.weighted_successors(n, weight),
            |n| n == target,
        );
        Ok(found.map_or(f64::INFINITY, |(_, cost)| cost.into_inner()))
    }

    /// Same as [`shortest_path_cost`](Self::shortest_path_cost), guided by
    /// `heuristic` (A*).
    ///
    /// `heuristic(n)` must never overestimate the remaining cost from `n`
    /// to `target`; with an admissible heuristic both queries agree.
    /// A heuristic returning `0.0` everywhere degrades to Dijkstra.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownWeight`] if no edge carries `weight`.
    pub fn shortest_path_cost_astar<H>(
        &self,
        source: &N,
        target: &N,
        weight: &str,
        mut heuristic: H,
    ) -> Result<f64, GraphError>
    where
        H: FnMut(&N) -> f64,
    {
        self.require_weight(weight)?;
        if !self.contains_node(source) || !self.contains_node(target) {
            return Ok(f64::INFINITY);
        }
        let found = astar(
            source,
            |n| self.weighted_successors(n, weight),
            |n| OrderedFloat(heuristic(n)),
            |n| n == target,
        );
        Ok(found.map_or(f64::INFINITY, |(_, cost)| cost.into_inner()))
    }

    /// Minimum `weight` cost from `source` to every node it can reach,
    /// `source` itself included at `0.0`.
    ///
    /// Nodes missing from the result are unreachable. An unknown `source`
    /// yields an empty map.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownWeight`] if no edge carries `weight`.
    pub fn shortest_path_tree(&self, source: &N, weight: &str) -> Result<IndexMap<N, f64>, GraphError> {
        self.require_weight(weight)?;
        let mut tree = IndexMap::new();
        if !self.contains_node(source) {
            return Ok(tree);
        }
        tree.insert(source.clone(), 0.0);
        let reached = dijkstra_all(source, |n| self.weighted_successors(n, weight));
        tree.extend(
            reached
                .into_iter()
                .filter(|(n, _)| n != source)
                .map(|(n, (_, cost))| (n, cost.into_inner())),
        );
        trace!(?source, weight, reached = tree.len(), "shortest-path tree");
        Ok(tree)
    }
}
