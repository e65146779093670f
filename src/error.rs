//! Error types.
//!
//! Every error is a validation failure raised while building a [`Graph`],
//! a partition, or while attaching a partition to a graph. Decompositions
//! themselves never fail on a valid graph.
//!
//! [`Graph`]: crate::Graph

use thiserror::Error;

/// Result type for fallible constructors of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Duplicate vertex, or an adjacency list naming an unknown vertex.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A candidate SCC or BCC breaks the partition invariant.
    #[error("invalid partition: {0}")]
    InvalidPartition(String),

    /// The partition does not describe the graph it is attached to.
    #[error("attachment mismatch: {0}")]
    AttachmentMismatch(String),

    /// An SCC algorithm name that is not recognized.
    #[error("unknown SCC algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
