//! Error types for the Profile backend.

use thiserror::Error;

/// Errors that can occur during profile operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// The patch carried a value the backend refuses to store.
    #[error("Profile validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the backend.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProfileError {
    fn from(msg: String) -> Self {
        ProfileError::ActorCommunicationError(msg)
    }
}
