//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent precondition violations on a data structure.
/// They are independent of configuration and terminal concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("vertex {vertex} out of range: graph has {num_vertices} vertices")]
    VertexOutOfRange { vertex: i32, num_vertices: usize },

    #[error("{structure} is full: capacity {capacity}")]
    CapacityExceeded {
        structure: &'static str,
        capacity: usize,
    },

    #[error("{structure} needs a capacity of at least 1")]
    ZeroCapacity { structure: &'static str },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
