//! Error types for graph mutation, queries and loading.
//!
//! Node identifiers are rendered with `Debug` when an error is built, which
//! keeps the error types independent of the graph's node type.

use std::error::Error;
use std::fmt;

/// Errors from [`WeightedGraph`](crate::WeightedGraph) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// The weight mapping passed to `add_edge` is malformed.
    InvalidWeights {
        /// What was wrong with it.
        reason: String,
    },
    /// `remove_edge` was called for an edge that does not exist.
    EdgeNotFound {
        /// Source node of the missing edge.
        source: String,
        /// Target node of the missing edge.
        target: String,
    },
    /// A query named a weight that no edge carries.
    UnknownWeight {
        /// The requested weight name.
        weight: String,
        /// Weight names currently present in the graph.
        known: Vec<String>,
    },
    /// A subset source is absent from the graph or restricted.
    InvalidSource {
        /// The offending source.
        source: String,
        /// Why it was refused.
        reason: &'static str,
    },
    /// A source was listed more than once for a multi-source partition.
    DuplicateSource {
        /// The repeated source.
        source: String,
    },
}

impl GraphError {
    pub(crate) fn edge_not_found(source: &impl fmt::Debug, target: &impl fmt::Debug) -> Self {
        Self::EdgeNotFound {
            source: format!("{source:?}"),
            target: format!("{target:?}"),
        }
    }

    pub(crate) fn invalid_source(source: &impl fmt::Debug, reason: &'static str) -> Self {
        Self::InvalidSource {
            source: format!("{source:?}"),
            reason,
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeights { reason } => write!(f, "invalid weights: {reason}"),
            Self::EdgeNotFound { source, target } => {
                write!(f, "no edge from {source} to {target}")
            }
            Self::UnknownWeight { weight, known } => {
                write!(f, "unknown weight '{weight}', valid weights: [{}]", known.join(", "))
            }
            Self::InvalidSource { source, reason } => {
                write!(f, "invalid source {source}: {reason}")
            }
            Self::DuplicateSource { source } => {
                write!(f, "source {source} listed more than once")
            }
        }
    }
}

impl Error for GraphError {}

/// Errors from building a graph out of tabular records.
#[derive(Debug)]
pub enum LoadError {
    /// The record source could not be read or parsed.
    Csv(csv::Error),
    /// A requested column is absent from the header row.
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },
    /// A weight cell does not hold a number.
    InvalidNumber {
        /// 1-based data row (the header is row 0).
        row: usize,
        /// Column the value came from.
        column: String,
        /// The raw cell contents.
        value: String,
    },
    /// A row was rejected by the graph.
    Graph(GraphError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(e) => write!(f, "csv: {e}"),
            Self::MissingColumn { column } => write!(f, "missing column '{column}'"),
            Self::InvalidNumber { row, column, value } => {
                write!(f, "row {row}, column '{column}': '{value}' is not a number")
            }
            Self::Graph(e) => write!(f, "graph: {e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(e) => Some(e),
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<GraphError> for LoadError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}
