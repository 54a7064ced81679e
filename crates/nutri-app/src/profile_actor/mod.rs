//! # Profile Backend
//!
//! Mock remote serving the signed-in user's [`Profile`]. Patches are validated before
//! they are committed; a rejected patch leaves the stored profile as it was.
//!
//! ## Structure
//!
//! - [`entity`] - [`RemoteEntity`](resource_hooks::RemoteEntity) implementation for [`Profile`]
//! - [`error`] - [`ProfileError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use nutri_app::model::ProfilePatch;
//! use nutri_app::clients::ProfileClient;
//! use nutri_app::profile_actor;
//! use resource_hooks::{PatchAdapter, ServiceClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = profile_actor::new(32, Duration::ZERO);
//!     tokio::spawn(actor.run());
//!
//!     let patch = ProfilePatch { weight_kg: Some(72.5), ..Default::default() };
//!     let profile = client.update(patch).await.map_err(ProfileClient::map_error)?;
//!     assert_eq!(profile.weight_kg, 72.5);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProfileClient;
use crate::model::Profile;
use resource_hooks::RemoteActor;
use std::time::Duration;

/// Creates a new Profile backend seeded with [`Profile::sample`] and its client.
pub fn new(buffer_size: usize, latency: Duration) -> (RemoteActor<Profile>, ProfileClient) {
    let (actor, generic_client) = RemoteActor::new(Profile::sample(), buffer_size);
    (actor.with_latency(latency), ProfileClient::new(generic_client))
}
