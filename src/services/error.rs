//! Error type shared by the content services.

use thiserror::Error;

/// Failures produced by the service layer. The GraphQL layer propagates these
/// unchanged onto the error channel; it performs no translation or retry.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("no entity with id {id}")]
    NotFound { id: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
