//! Error types for vectum operations.

use thiserror::Error;

/// Errors that can occur when building vectors from caller-supplied data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectumError {
    /// The supplied components cannot be resolved into an (x, y, z) triple.
    #[error("invalid arguments: expected 2 or 3 components, got {count}")]
    InvalidArguments {
        /// Number of components supplied.
        count: usize,
    },
}
