//! Partitioner configuration.

/// Configuration for [`WeightedGraph::disjoint_subsets_with`].
///
/// Controls how many worker threads compute per-source subsets. The
/// result does not depend on the worker count.
///
/// [`WeightedGraph::disjoint_subsets_with`]: crate::WeightedGraph::disjoint_subsets_with
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartitionConfig {
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
}

impl PartitionConfig {
    /// Single-threaded configuration.
    pub fn sequential() -> Self {
        Self {
            worker_count: Some(1),
        }
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }
}
