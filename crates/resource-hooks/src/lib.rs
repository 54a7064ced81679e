//! # Resource Hooks
//!
//! Building blocks for screens that show remote-backed data: fetch it when mounted, show
//! a loading flag, let the user mutate it, record a readable error when something fails,
//! and keep whatever was loaded before.
//!
//! ## Architecture Overview
//!
//! Three layers, in dependency order:
//!
//! 1. **Adapter Layer** ([`ReadAdapter`], [`PatchAdapter`], [`RemoveAdapter`]) - one
//!    async remote operation each. Writes resolve with the whole resulting resource.
//! 2. **Hook Layer** ([`ResourceHook`]) - owns the observable [`ResourceState`] of one
//!    resource for the lifetime of a [`MountScope`].
//! 3. **Collection Layer** ([`remove_item`], [`remove_by_id`], [`fetch_joined`]) -
//!    removal by id after a remote delete, and parallel loads of several lists.
//!
//! A mock backend ([`RemoteActor`] + [`RemoteClient`]) stands in for real services: it
//! owns a fixture document, answers after a configurable latency and processes requests
//! one at a time.
//!
//! ## Example
//!
//! ```rust
//! use resource_hooks::{MountScope, RemoteActor, RemoteEntity, ResourceHook};
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Profile { name: String }
//!
//! impl RemoteEntity for Profile {
//!     type Patch = String;
//!     type ItemId = Infallible;
//!     type Action = Infallible;
//!     type Error = Infallible;
//!     fn apply_patch(&mut self, name: String) -> Result<(), Infallible> { self.name = name; Ok(()) }
//!     fn remove_item(&mut self, id: &Infallible) -> Result<(), Infallible> { match *id {} }
//!     fn handle_action(&mut self, action: Infallible) -> Result<(), Infallible> { match action {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = RemoteActor::new(Profile { name: "Ada".into() }, 8);
//!     tokio::spawn(actor.run());
//!
//!     let scope = MountScope::new("profile-screen");
//!     let hook = ResourceHook::builder("profile", client.clone())
//!         .fetch_error("Failed to load profile")
//!         .mount(&scope);
//!
//!     let state = hook.settled().await;
//!     assert_eq!(state.data.unwrap().name, "Ada");
//!
//!     hook.mutate("rename", "Failed to update profile", client.update("Grace".into()))
//!         .await;
//!     assert_eq!(hook.data().unwrap().name, "Grace");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Every adapter call is an await point; `is_loading` / `is_busy` mark in-flight calls.
//! - Calls on one hook are not queued. See [`StalePolicy`] for how out-of-order
//!   responses are treated.
//! - Remote calls are never aborted. Completions that settle after their scope was
//!   unmounted are discarded.
//!
//! ## Testing
//!
//! See the [`mock`] module for scripted remotes that capture request payloads.

pub mod actor;
pub mod adapter;
pub mod client;
pub mod client_trait;
pub mod collection;
pub mod entity;
pub mod error;
pub mod hook;
pub mod message;
pub mod mock;
pub mod scope;
pub mod tracing;

// Re-export core types for convenience
pub use actor::RemoteActor;
pub use adapter::{PatchAdapter, ReadAdapter, RemoveAdapter};
pub use client::RemoteClient;
pub use client_trait::ServiceClient;
pub use collection::{fetch_joined, remove_by_id, remove_item, Identified};
pub use entity::RemoteEntity;
pub use error::AdapterError;
pub use hook::{Outcome, ResourceHook, ResourceHookBuilder, ResourceState, StalePolicy};
pub use message::{RemoteRequest, Response};
pub use scope::{MountScope, MountToken};
