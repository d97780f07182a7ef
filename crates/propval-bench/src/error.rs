//! Error types for the benchmark harness

use thiserror::Error;

/// Main error type for harness operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// The configuration cannot produce a meaningful run
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Left and right operand lists differ in length
    #[error("Mismatched population sides: {lhs} left operands, {rhs} right operands")]
    MismatchedSides {
        /// Number of left operands
        lhs: usize,
        /// Number of right operands
        rhs: usize,
    },
}

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, BenchError>;
