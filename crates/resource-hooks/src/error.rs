//! # Adapter Errors
//!
//! Every remote operation in the system fails with an [`AdapterError`]. Hooks never
//! show these to the view directly: they log them and record a fixed message instead.

/// Errors that can occur while talking to a remote backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdapterError {
    #[error("Remote closed")]
    ActorClosed,
    #[error("Remote dropped response channel")]
    ActorDropped,
    /// The backend received the request and refused it (validation, unknown id, ...).
    #[error("Rejected: {0}")]
    Rejected(String),
    /// Transport-level failure (network down, 5xx, injected fault).
    #[error("Remote failure: {0}")]
    Remote(String),
}
