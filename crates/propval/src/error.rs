//! Error types for property value access

use thiserror::Error;

use crate::value::Kind;

/// Main error type for property value operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyError {
    /// A typed accessor was called on a value of another kind
    #[error("Kind mismatch: expected {expected}, got {got}")]
    KindMismatch {
        /// Kind the accessor asked for
        expected: Kind,
        /// Kind the value actually holds
        got: Kind,
    },
}

impl PropertyError {
    /// Build a kind mismatch error
    pub fn kind_mismatch(expected: Kind, got: Kind) -> Self {
        PropertyError::KindMismatch { expected, got }
    }
}

/// Result type alias for property value operations
pub type Result<T> = std::result::Result<T, PropertyError>;
