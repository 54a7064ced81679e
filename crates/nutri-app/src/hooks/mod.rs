//! # Feature Hooks
//!
//! One hook per screen-level resource. Each wraps a [`ResourceHook`] with the fixed
//! failure messages for its resource and named actions that delegate to the generic
//! mutation entry points.
//!
//! | Hook | Busy flag | Actions |
//! |------|-----------|---------|
//! | [`ProfileHook`] | `is_saving` | `update_profile` |
//! | [`DietaryHook`] | `is_saving` | `update_diets`, `add_allergen`, `remove_allergen`, `update_preferences` |
//! | [`SavedItemsHook`] | `is_saving` | `remove_restaurant`, `remove_menu` |
//! | [`HealthConnectHook`] | `is_toggling` | `connect`, `disconnect`, `sync` |
//!
//! Every hook also gets `refetch`, `state`, `subscribe` and `settled` from [`FeatureHook`].

pub mod dietary_hook;
pub mod health_connect_hook;
pub mod profile_hook;
pub mod saved_items_hook;

pub use dietary_hook::DietaryHook;
pub use health_connect_hook::HealthConnectHook;
pub use profile_hook::ProfileHook;
pub use saved_items_hook::SavedItemsHook;

use async_trait::async_trait;
use resource_hooks::{Outcome, ResourceHook, ResourceState};
use tokio::sync::watch;

/// Consumer surface shared by all feature hooks.
#[async_trait]
pub trait FeatureHook: Send + Sync {
    type Data: Clone + Send + Sync + 'static;

    /// The underlying generic hook.
    fn resource(&self) -> &ResourceHook<Self::Data>;

    /// A copy of `{ data, is_loading, is_busy, error }`.
    fn state(&self) -> ResourceState<Self::Data> {
        self.resource().snapshot()
    }

    fn is_loading(&self) -> bool {
        self.state().is_loading
    }

    fn error(&self) -> Option<String> {
        self.state().error
    }

    fn subscribe(&self) -> watch::Receiver<ResourceState<Self::Data>> {
        self.resource().subscribe()
    }

    /// Waits until no call is in flight.
    async fn settled(&self) -> ResourceState<Self::Data> {
        self.resource().settled().await
    }

    async fn refetch(&self) -> Outcome {
        self.resource().refetch().await
    }
}
