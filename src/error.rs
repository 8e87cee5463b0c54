//! Error types for algolab
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using AlgoError
pub type Result<T> = std::result::Result<T, AlgoError>;

/// Unified error type for algolab operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgoError {
    // -------------------------------------------------------------------------
    // Indexed Collection Errors
    // -------------------------------------------------------------------------
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    // -------------------------------------------------------------------------
    // Underflow Errors
    // -------------------------------------------------------------------------
    #[error("stack underflow: pop on an empty stack")]
    StackUnderflow,

    #[error("queue underflow: dequeue on an empty queue")]
    QueueUnderflow,

    #[error("heap underflow: extract on an empty heap")]
    HeapUnderflow,

    // -------------------------------------------------------------------------
    // Graph Errors
    // -------------------------------------------------------------------------
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    #[error("graph contains a cycle")]
    CycleDetected,

    #[error("negative edge weight: {0}")]
    NegativeWeight(i64),

    // -------------------------------------------------------------------------
    // Input Validation Errors
    // -------------------------------------------------------------------------
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
