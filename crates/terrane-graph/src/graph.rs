//! The [`WeightedGraph`] container and its derived indices.

use crate::error::GraphError;
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// Named scalar weights carried by one edge.
pub type Weights = IndexMap<String, f64>;

/// Requirements on graph node identifiers.
///
/// Blanket-implemented; any cloneable, hashable, debuggable value works
/// (`String`, integers, tuples, small id newtypes).
pub trait Node: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Node for T {}

/// Directed graph whose edges carry named weights.
///
/// At most one edge exists per ordered `(source, target)` pair; adding it
/// again replaces its weights. Alongside the edges the graph keeps three
/// pieces of derived state, all updated within each mutation:
///
/// - the *source role set*: nodes with at least one outgoing edge;
/// - the *target role set*: nodes with at least one incoming edge;
/// - the *weight index*: for each weight name, the pairs carrying it. A
///   name with no pairs left is dropped from the index.
///
/// A node exists only while some edge touches it.
///
/// Mutation takes `&mut self` and queries take `&self`, so callers sharing
/// a graph across threads must serialise writers themselves (for example
/// behind an `RwLock`).
///
/// # Examples
///
/// ```
/// use terrane_graph::WeightedGraph;
///
/// let mut g = WeightedGraph::new();
/// g.add_edge("a", "b", [("time", 4.0), ("toll", 1.0)]).unwrap();
/// g.add_edge("b", "c", [("time", 3.0)]).unwrap();
///
/// assert!(g.has_edge(&"a", &"b"));
/// assert_eq!(g.shortest_path_cost(&"a", &"c", "time").unwrap(), 7.0);
/// // `b -> c` carries no toll, so there is no toll-weighted route to `c`.
/// assert_eq!(g.shortest_path_cost(&"a", &"c", "toll").unwrap(), f64::INFINITY);
/// ```
#[derive(Clone, Debug)]
pub struct WeightedGraph<N> {
    /// Outgoing edges. A key is present iff the node has out-degree >= 1,
    /// so the key set is the source role set.
    pub(crate) successors: IndexMap<N, IndexMap<N, Weights>>,
    /// Incoming neighbours. Key set is the target role set.
    predecessors: IndexMap<N, IndexSet<N>>,
    weight_index: IndexMap<String, IndexSet<(N, N)>>,
    edge_count: usize,
}

impl<N> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self {
            successors: IndexMap::new(),
            predecessors: IndexMap::new(),
            weight_index: IndexMap::new(),
            edge_count: 0,
        }
    }
}

impl<N: Node> PartialEq for WeightedGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count
            && self.successors == other.successors
            && self.predecessors == other.predecessors
            && self.weight_index == other.weight_index
    }
}

fn validate_weights(weights: &Weights) -> Result<(), GraphError> {
    for (name, &value) in weights {
        if name.trim().is_empty() {
            return Err(GraphError::InvalidWeights {
                reason: "weight names must not be blank".into(),
            });
        }
        if !value.is_finite() {
            return Err(GraphError::InvalidWeights {
                reason: format!("weight '{name}' is {value}, expected a finite number"),
            });
        }
        if value < 0.0 {
            return Err(GraphError::InvalidWeights {
                reason: format!("weight '{name}' is negative ({value})"),
            });
        }
    }
    Ok(())
}

impl<N: Node> WeightedGraph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the graph has no edges (and therefore no nodes).
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Every node, sources first, each exactly once.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.successors.keys().chain(
            self.predecessors
                .keys()
                .filter(|n| !self.successors.contains_key(*n)),
        )
    }

    /// `true` if `node` is an endpoint of at least one edge.
    pub fn contains_node(&self, node: &N) -> bool {
        self.successors.contains_key(node) || self.predecessors.contains_key(node)
    }

    /// `true` if an edge from `source` to `target` exists.
    pub fn has_edge(&self, source: &N, target: &N) -> bool {
        self.edge_weights(source, target).is_some()
    }

    /// Weights of the edge from `source` to `target`, if it exists.
    pub fn edge_weights(&self, source: &N, target: &N) -> Option<&Weights> {
        self.successors.get(source)?.get(target)
    }

    /// Outgoing edges of `node` as `(target, weights)`, in insertion order.
    pub fn successors(&self, node: &N) -> impl Iterator<Item = (&N, &Weights)> + '_ {
        self.successors.get(node).into_iter().flatten()
    }

    /// Nodes with at least one outgoing edge.
    pub fn source_nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.successors.keys()
    }

    /// Nodes with at least one incoming edge.
    pub fn target_nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.predecessors.keys()
    }

    /// Weight names carried by at least one edge.
    pub fn weight_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.weight_index.keys().map(String::as_str)
    }

    /// `true` if at least one edge carries `weight`.
    pub fn has_weight(&self, weight: &str) -> bool {
        self.weight_index.contains_key(weight)
    }

    /// The `(source, target)` pairs carrying `weight`.
    pub fn weight_pairs(&self, weight: &str) -> Option<&IndexSet<(N, N)>> {
        self.weight_index.get(weight)
    }

    /// Insert the edge `source -> target`, replacing any existing weights.
    ///
    /// Names the previous mapping carried but `weights` does not are
    /// removed from the weight index for this pair. An empty mapping is
    /// allowed: the edge then links its endpoints without being usable by
    /// any weighted query.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidWeights`] if a name is blank or a value is
    /// negative, NaN or infinite. The graph is left unchanged.
    pub fn add_edge<W, K>(&mut self, source: N, target: N, weights: W) -> Result<(), GraphError>
    where
        W: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let weights: Weights = weights.into_iter().map(|(k, v)| (k.into(), v)).collect();
        validate_weights(&weights)?;

        let pair = (source.clone(), target.clone());
        let names: Vec<String> = weights.keys().cloned().collect();
        let previous = self
            .successors
            .entry(source.clone())
            .or_default()
            .insert(target.clone(), weights);

        match previous {
            Some(old) => {
                trace!(?source, ?target, "replacing edge weights");
                for name in old.keys().filter(|&n| !names.contains(n)) {
                    self.unindex(name, &pair);
                }
            }
            None => {
                trace!(?source, ?target, "adding edge");
                self.predecessors.entry(target).or_default().insert(source);
                self.edge_count += 1;
            }
        }
        for name in names {
            self.weight_index.entry(name).or_default().insert(pair.clone());
        }
        Ok(())
    }

    /// Remove the edge `source -> target` and return its weights.
    ///
    /// Endpoints left without outgoing (incoming) edges leave the source
    /// (target) role set; weight names left without pairs leave the index.
    ///
    /// # Errors
    ///
    /// [`GraphError::EdgeNotFound`] if there is no such edge.
    pub fn remove_edge(&mut self, source: &N, target: &N) -> Result<Weights, GraphError> {
        let outgoing = self
            .successors
            .get_mut(source)
            .ok_or_else(|| GraphError::edge_not_found(source, target))?;
        let weights = outgoing
            .shift_remove(target)
            .ok_or_else(|| GraphError::edge_not_found(source, target))?;
        if outgoing.is_empty() {
            self.successors.shift_remove(source);
        }

        if let Some(incoming) = self.predecessors.get_mut(target) {
            incoming.shift_remove(source);
            if incoming.is_empty() {
                self.predecessors.shift_remove(target);
            }
        }

        let pair = (source.clone(), target.clone());
        for name in weights.keys() {
            self.unindex(name, &pair);
        }
        self.edge_count -= 1;
        trace!(?source, ?target, "removed edge");
        Ok(weights)
    }

    fn unindex(&mut self, name: &str, pair: &(N, N)) {
        if let Some(pairs) = self.weight_index.get_mut(name) {
            pairs.shift_remove(pair);
            if pairs.is_empty() {
                self.weight_index.shift_remove(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Check every derived index against the edge map.
    fn assert_invariants(g: &WeightedGraph<u8>) {
        let mut edges = 0;
        for (s, out) in &g.successors {
            assert!(!out.is_empty(), "{s} kept in source set without edges");
            for (t, weights) in out {
                edges += 1;
                assert!(
                    g.predecessors.get(t).is_some_and(|p| p.contains(s)),
                    "{s}->{t} missing from predecessors"
                );
                for name in weights.keys() {
                    assert!(
                        g.weight_index
                            .get(name)
                            .is_some_and(|p| p.contains(&(*s, *t))),
                        "{s}->{t} missing from index '{name}'"
                    );
                }
            }
        }
        assert_eq!(edges, g.edge_count);
        for (t, incoming) in &g.predecessors {
            assert!(!incoming.is_empty(), "{t} kept in target set without edges");
            for s in incoming {
                assert!(g.has_edge(s, t), "predecessor {s}->{t} has no edge");
            }
        }
        for (name, pairs) in &g.weight_index {
            assert!(!pairs.is_empty(), "empty index '{name}' kept");
            for (s, t) in pairs {
                let weights = g.edge_weights(s, t).expect("indexed pair has an edge");
                assert!(weights.contains_key(name));
            }
        }
    }

    #[test]
    fn add_edge_updates_roles_and_index() {
        let mut g = WeightedGraph::new();
        g.add_edge(1u8, 2, [("time", 1.0), ("dist", 2.0)]).unwrap();
        assert!(g.has_edge(&1, &2));
        assert!(!g.has_edge(&2, &1));
        assert_eq!(g.source_nodes().collect::<Vec<_>>(), vec![&1]);
        assert_eq!(g.target_nodes().collect::<Vec<_>>(), vec![&2]);
        assert_eq!(g.weight_names().collect::<Vec<_>>(), vec!["time", "dist"]);
        assert_eq!(g.node_count(), 2);
        assert_invariants(&g);
    }

    #[test]
    fn re_adding_replaces_weights_and_drops_stale_names() {
        let mut g = WeightedGraph::new();
        g.add_edge(1u8, 2, [("time", 1.0), ("toll", 3.0)]).unwrap();
        g.add_edge(1u8, 2, [("time", 5.0)]).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weights(&1, &2).unwrap()["time"], 5.0);
        assert!(!g.has_weight("toll"));
        assert_invariants(&g);
    }

    #[test]
    fn remove_edge_cleans_up_roles_and_index() {
        let mut g = WeightedGraph::new();
        g.add_edge(1u8, 2, [("time", 1.0)]).unwrap();
        g.add_edge(1u8, 3, [("time", 1.0), ("toll", 2.0)]).unwrap();

        let removed = g.remove_edge(&1, &3).unwrap();
        assert_eq!(removed["toll"], 2.0);
        assert!(!g.contains_node(&3));
        assert!(g.source_nodes().any(|n| *n == 1));
        assert!(!g.has_weight("toll"));
        assert_invariants(&g);

        g.remove_edge(&1, &2).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.weight_names().count(), 0);
    }

    #[test]
    fn remove_missing_edge_fails() {
        let mut g = WeightedGraph::new();
        g.add_edge(1u8, 2, [("time", 1.0)]).unwrap();
        assert_eq!(
            g.remove_edge(&2, &1),
            Err(GraphError::EdgeNotFound {
                source: "2".into(),
                target: "1".into()
            })
        );
        assert!(g.remove_edge(&1, &9).is_err());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn malformed_weights_are_rejected_without_side_effects() {
        let mut g: WeightedGraph<u8> = WeightedGraph::new();
        for bad in [
            vec![("time", f64::NAN)],
            vec![("time", f64::INFINITY)],
            vec![("time", -1.0)],
            vec![(" ", 1.0)],
        ] {
            assert!(matches!(
                g.add_edge(1, 2, bad),
                Err(GraphError::InvalidWeights { .. })
            ));
        }
        assert!(g.is_empty());
        assert_invariants(&g);
    }

    #[test]
    fn empty_weight_mapping_links_nodes() {
        let mut g = WeightedGraph::new();
        g.add_edge(1u8, 2, Vec::<(String, f64)>::new()).unwrap();
        assert!(g.has_edge(&1, &2));
        assert_eq!(g.weight_names().count(), 0);
        assert_invariants(&g);
    }

    #[test]
    fn self_loop_occupies_both_roles() {
        let mut g = WeightedGraph::new();
        g.add_edge(7u8, 7, [("time", 0.0)]).unwrap();
        assert_eq!(g.node_count(), 1);
        g.remove_edge(&7, &7).unwrap();
        assert!(!g.contains_node(&7));
        assert_invariants(&g);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Add(u8, u8, Vec<(u8, u8)>),
        Remove(u8, u8),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..6, 0u8..6, prop::collection::vec((0u8..3, 0u8..10), 0..3))
                .prop_map(|(s, t, w)| Op::Add(s, t, w)),
            (0u8..6, 0u8..6).prop_map(|(s, t)| Op::Remove(s, t)),
        ]
    }

    fn apply(g: &mut WeightedGraph<u8>, op: &Op) {
        match op {
            Op::Add(s, t, w) => {
                let weights = w.iter().map(|&(n, v)| (format!("w{n}"), v as f64));
                g.add_edge(*s, *t, weights).unwrap();
            }
            Op::Remove(s, t) => {
                let existed = g.has_edge(s, t);
                assert_eq!(g.remove_edge(s, t).is_ok(), existed);
            }
        }
    }

    proptest! {
        #[test]
        fn invariants_hold_after_any_sequence(ops in prop::collection::vec(arb_op(), 0..40)) {
            let mut g = WeightedGraph::new();
            for op in &ops {
                apply(&mut g, op);
                assert_invariants(&g);
            }
        }

        #[test]
        fn add_then_remove_restores_graph(
            ops in prop::collection::vec(arb_op(), 0..30),
            s in 0u8..6,
            t in 0u8..6,
            w in prop::collection::vec((0u8..3, 0u8..10), 0..3),
        ) {
            let mut g = WeightedGraph::new();
            for op in &ops {
                apply(&mut g, op);
            }
            prop_assume!(!g.has_edge(&s, &t));
            let before = g.clone();
            apply(&mut g, &Op::Add(s, t, w));
            g.remove_edge(&s, &t).unwrap();
            prop_assert_eq!(g, before);
        }
    }
}
