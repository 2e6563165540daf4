//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown perspective: {0}")]
    UnknownPerspective(String),

    #[error("Agent catalog is empty")]
    EmptyCatalog,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DomainError {
    /// Check if this error was caused by an uncataloged agent name
    pub fn is_unknown_perspective(&self) -> bool {
        matches!(self, DomainError::UnknownPerspective(_))
    }
}
