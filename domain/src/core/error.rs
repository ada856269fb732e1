//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Archetype not found: {0}")]
    ArchetypeNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Check if this error represents a failed taxonomy lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::ArchetypeNotFound(_))
    }
}
