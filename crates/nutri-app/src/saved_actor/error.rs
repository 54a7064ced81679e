//! Error types for the Saved-Items backends.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SavedItemsError {
    /// No saved entry has the requested id.
    #[error("Saved item not found: {0}")]
    NotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SavedItemsError {
    fn from(msg: String) -> Self {
        SavedItemsError::ActorCommunicationError(msg)
    }
}
