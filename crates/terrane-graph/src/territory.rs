//! Threshold-bounded territories around one or many sources.
//!
//! [`subset`](WeightedGraph::subset) grows a breadth-first frontier from a
//! single source and keeps every discovered node whose shortest-path cost
//! stays within every threshold. [`disjoint_subsets`](WeightedGraph::disjoint_subsets)
//! runs it per source and hands each contested node to the source closest
//! to it under one designated weight.
//!
//! # Contention
//!
//! A node reachable from several sources goes to the source with the
//! smallest distance under the resolving weight. A source whose subset has
//! no entry for that weight counts as infinitely far. Exact ties go to the
//! source listed first.

use crate::config::PartitionConfig;
use crate::error::GraphError;
use crate::graph::{Node, WeightedGraph};
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Distance limits keyed by weight name.
pub type Thresholds = IndexMap<String, f64>;

/// Per-weight distances from a source to one node.
pub type Distances = IndexMap<String, f64>;

/// Nodes reachable from one source within the thresholds, with their
/// distances. The source maps to all-zero distances.
pub type ReachableSet<N> = IndexMap<N, Distances>;

/// Exclusive reachable sets keyed by source, in source order.
pub type Territories<N> = IndexMap<N, ReachableSet<N>>;

impl<N: Node> WeightedGraph<N> {
    /// Nodes reachable from `source` without exceeding any threshold.
    ///
    /// Expansion follows outgoing edges breadth-first. Each newly
    /// discovered node that is not `restricted` is tested once: it joins
    /// the result, and its own successors are explored, iff its
    /// shortest-path cost under every threshold weight is at most the
    /// threshold. Costs are measured over the whole graph, so routes may
    /// pass through restricted nodes even though those nodes never appear
    /// in the result.
    ///
    /// With no thresholds every node reachable over edges from `source`
    /// is accepted.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidSource`] if `source` is not in the graph or
    ///   is restricted.
    /// - [`GraphError::UnknownWeight`] if a threshold names a weight no
    ///   edge carries.
    pub fn subset(
        &self,
        source: &N,
        thresholds: &Thresholds,
        restricted: &IndexSet<N>,
    ) -> Result<ReachableSet<N>, GraphError> {
        if !self.contains_node(source) {
            return Err(GraphError::invalid_source(source, "not present in the graph"));
        }
        if restricted.contains(source) {
            return Err(GraphError::invalid_source(source, "source is restricted"));
        }

        // One shortest-path tree per weight replaces a query per node.
        let trees = thresholds
            .iter()
            .map(|(weight, &limit)| {
                self.shortest_path_tree(source, weight)
                    .map(|tree| (weight, limit, tree))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut reachable = ReachableSet::new();
        reachable.insert(
            source.clone(),
            thresholds.keys().map(|w| (w.clone(), 0.0)).collect(),
        );
        let mut tested: HashSet<&N> = HashSet::new();
        tested.insert(source);
        let mut queue: VecDeque<&N> = VecDeque::new();
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            for (next, _) in self.successors(node) {
                if restricted.contains(next) || !tested.insert(next) {
                    continue;
                }
                let distances: Distances = trees
                    .iter()
                    .map(|(weight, _, tree)| {
                        let d = tree.get(next).copied().unwrap_or(f64::INFINITY);
                        ((*weight).clone(), d)
                    })
                    .collect();
                let within = trees
                    .iter()
                    .zip(distances.values())
                    .all(|((_, limit, _), d)| d <= limit);
                if within {
                    reachable.insert(next.clone(), distances);
                    queue.push_back(next);
                }
            }
        }

        debug!(
            ?source,
            tested = tested.len(),
            accepted = reachable.len(),
            "subset computed"
        );
        Ok(reachable)
    }

    /// Split the territory around several sources so that no node belongs
    /// to more than one of them.
    ///
    /// Every source's [`subset`](Self::subset) is computed independently;
    /// each node they reach is then assigned to the source with the
    /// smallest `weight` distance (see the module docs for ties). Every
    /// source appears in the result, in input order, with only the nodes
    /// it won.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateSource`] if a source is listed twice.
    /// - Any error from [`subset`](Self::subset), for the first failing
    ///   source in input order.
    pub fn disjoint_subsets(
        &self,
        sources: &[N],
        thresholds: &Thresholds,
        weight: &str,
        restricted: &IndexSet<N>,
    ) -> Result<Territories<N>, GraphError> {
        check_distinct(sources)?;
        let subsets = sources
            .iter()
            .map(|s| self.subset(s, thresholds, restricted))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(resolve_contention(sources, subsets, weight))
    }

    /// [`disjoint_subsets`](Self::disjoint_subsets) with per-source subsets
    /// computed on scoped worker threads.
    ///
    /// Produces exactly the same result, and the same error, as the
    /// sequential version.
    pub fn disjoint_subsets_with(
        &self,
        sources: &[N],
        thresholds: &Thresholds,
        weight: &str,
        restricted: &IndexSet<N>,
        config: &PartitionConfig,
    ) -> Result<Territories<N>, GraphError>
    where
        N: Send + Sync,
    {
        check_distinct(sources)?;
        let workers = config.resolved_worker_count().min(sources.len());
        if workers <= 1 {
            return self.disjoint_subsets(sources, thresholds, weight, restricted);
        }

        let (tx, rx) = crossbeam_channel::unbounded();
        let next = AtomicUsize::new(0);
        std::thread::scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                let next = &next;
                scope.spawn(move || loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    let Some(source) = sources.get(i) else {
                        break;
                    };
                    let result = self.subset(source, thresholds, restricted);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                });
            }
        });
        drop(tx);

        let mut results: Vec<_> = rx.iter().collect();
        results.sort_by_key(|(i, _)| *i);
        debug!(workers, sources = sources.len(), "parallel subsets computed");
        let subsets = results
            .into_iter()
            .map(|(_, r)| r)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(resolve_contention(sources, subsets, weight))
    }
}

fn check_distinct<N: Node>(sources: &[N]) -> Result<(), GraphError> {
    let mut seen = HashSet::with_capacity(sources.len());
    for s in sources {
        if !seen.insert(s) {
            return Err(GraphError::DuplicateSource {
                source: format!("{s:?}"),
            });
        }
    }
    Ok(())
}

/// Assign each reached node to its closest source; `subsets[i]` belongs
/// to `sources[i]`.
fn resolve_contention<N: Node>(
    sources: &[N],
    subsets: Vec<ReachableSet<N>>,
    weight: &str,
) -> Territories<N> {
    let mut winners: HashMap<N, (usize, f64)> = HashMap::new();
    for (i, subset) in subsets.iter().enumerate() {
        for (node, distances) in subset {
            let d = distances.get(weight).copied().unwrap_or(f64::INFINITY);
            match winners.get_mut(node) {
                // Strictly closer only: ties stay with the earlier source.
                Some(best) if d < best.1 => *best = (i, d),
                Some(_) => {}
                None => {
                    winners.insert(node.clone(), (i, d));
                }
            }
        }
    }

    let mut contested = 0usize;
    let mut territories = Territories::with_capacity(sources.len());
    for (i, (source, subset)) in sources.iter().zip(subsets).enumerate() {
        let before = subset.len();
        let won: ReachableSet<N> = subset
            .into_iter()
            .filter(|(node, _)| winners.get(node).is_some_and(|(w, _)| *w == i))
            .collect();
        contested += before - won.len();
        territories.insert(source.clone(), won);
    }
    debug!(
        sources = sources.len(),
        nodes = winners.len(),
        lost = contested,
        "contention resolved"
    );
    territories
}
