//! # RemoteEntity Trait
//!
//! The contract a document must satisfy to be served by the mock [`RemoteActor`](crate::RemoteActor).
//! A remote entity is a single per-user document (a profile, a list of saved restaurants,
//! a connection status) that the backend reads, patches, prunes and acts upon.
//!
//! Associated types keep every operation typed: a `ProfilePatch` can only ever reach the
//! profile backend. Entities that do not support an operation use
//! [`std::convert::Infallible`] for the corresponding payload type, which makes the
//! request impossible to construct.

use std::fmt::{Debug, Display};

/// A document owned by a remote backend.
///
/// All write operations mutate `self` in place; the actor then answers with a clone of
/// the whole document, so callers always receive the full resulting resource.
pub trait RemoteEntity: Clone + Send + Sync + 'static {
    /// Partial update applied by `update`.
    type Patch: Send + Sync + Debug;

    /// Identifier of an element inside the document, used by `remove`.
    type ItemId: Send + Sync + Debug + Display;

    /// Connection-style operations (`connect`, `sync`, ...).
    type Action: Send + Sync + Debug;

    /// Validation failures raised by the entity itself.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply a partial update to the document.
    fn apply_patch(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    /// Remove one element from the document.
    fn remove_item(&mut self, id: &Self::ItemId) -> Result<(), Self::Error>;

    /// Perform a custom operation on the document.
    fn handle_action(&mut self, action: Self::Action) -> Result<(), Self::Error>;
}
