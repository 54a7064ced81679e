//! Error types for the Health Connect backend.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum HealthConnectError {
    #[error("Health Connect is not connected")]
    NotConnected,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for HealthConnectError {
    fn from(msg: String) -> Self {
        HealthConnectError::ActorCommunicationError(msg)
    }
}
