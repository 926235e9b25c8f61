//! Error types for catalog construction.

use thiserror::Error;

use crate::model::NodeId;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating a graph catalog.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge references a node id that is not in the catalog.
    #[error("edge {index} references unknown node `{id}`")]
    UnknownEndpoint { index: usize, id: NodeId },

    /// Two nodes share the same id.
    #[error("duplicate node id `{0}`")]
    DuplicateNode(NodeId),

    /// Edge weight must lie in (0, 1].
    #[error("edge {index} has weight {weight} outside (0, 1]")]
    InvalidWeight { index: usize, weight: f32 },
}
