//! Building a [`WeightedGraph`] from CSV edge lists.
//!
//! Each data row is one directed edge. Columns are looked up by header
//! name, so extra columns are ignored and column order does not matter.
//! An empty weight cell means the edge does not carry that weight.

use crate::error::LoadError;
use crate::graph::WeightedGraph;
use std::io;
use std::path::Path;
use tracing::debug;

/// Which CSV columns hold the edge endpoints and weights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeColumns {
    /// Column holding the source node.
    pub source: String,
    /// Column holding the target node.
    pub target: String,
    /// Columns read as weights; each column name becomes a weight name.
    pub weights: Vec<String>,
}

impl EdgeColumns {
    /// Columns named `source` and `target` with the given weight columns.
    pub fn new<I, S>(weights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: "source".to_string(),
            target: "target".to_string(),
            weights: weights.into_iter().map(Into::into).collect(),
        }
    }

    /// Override the endpoint column names.
    pub fn with_endpoints(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source = source.into();
        self.target = target.into();
        self
    }
}

impl WeightedGraph<String> {
    /// Read an edge list with a header row from `reader`.
    ///
    /// Cells are trimmed. A later row for the same `(source, target)`
    /// pair replaces the earlier one, as with [`add_edge`](Self::add_edge).
    ///
    /// # Errors
    ///
    /// - [`LoadError::MissingColumn`] if a named column is not in the header.
    /// - [`LoadError::InvalidNumber`] for a non-numeric weight cell.
    /// - [`LoadError::Graph`] if the weights are rejected (e.g. negative).
    /// - [`LoadError::Csv`] for I/O or malformed CSV.
    pub fn from_csv_reader<R: io::Read>(reader: R, columns: &EdgeColumns) -> Result<Self, LoadError> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::from_csv(&mut csv, columns)
    }

    /// Read an edge list from the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Same as [`from_csv_reader`](Self::from_csv_reader).
    pub fn from_csv_path(path: impl AsRef<Path>, columns: &EdgeColumns) -> Result<Self, LoadError> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path.as_ref())?;
        Self::from_csv(&mut csv, columns)
    }

    fn from_csv<R: io::Read>(csv: &mut csv::Reader<R>, columns: &EdgeColumns) -> Result<Self, LoadError> {
        let headers = csv.headers()?.clone();
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    column: name.to_string(),
                })
        };
        let source_at = position(columns.source.as_str())?;
        let target_at = position(columns.target.as_str())?;
        let weight_at = columns
            .weights
            .iter()
            .map(|w| position(w.as_str()).map(|i| (w.as_str(), i)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut graph = Self::new();
        for (row, record) in csv.records().enumerate() {
            let record = record?;
            let row = row + 1;
            let cell = |i: usize| record.get(i).unwrap_or("");
            let mut weights = Vec::with_capacity(weight_at.len());
            for &(name, i) in &weight_at {
                let raw = cell(i);
                if raw.is_empty() {
                    continue;
                }
                let value = raw.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                    row,
                    column: name.to_string(),
                    value: raw.to_string(),
                })?;
                weights.push((name, value));
            }
            graph.add_edge(cell(source_at).to_string(), cell(target_at).to_string(), weights)?;
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            weights = graph.weight_names().count(),
            "graph loaded from csv"
        );
        Ok(graph)
    }
}
