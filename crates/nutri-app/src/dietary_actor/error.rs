//! Error types for the Dietary backend.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DietaryError {
    #[error("Dietary validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for DietaryError {
    fn from(msg: String) -> Self {
        DietaryError::ActorCommunicationError(msg)
    }
}
