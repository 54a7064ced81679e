//! Domain clients wrapping the generic [`RemoteClient`](resource_hooks::RemoteClient).
//!
//! Each client exposes typed, instrumented methods for its backend and implements the
//! adapter traits hooks load and write through.

pub mod dietary_client;
pub mod health_client;
pub mod profile_client;
pub mod saved_items_client;

pub use dietary_client::DietaryClient;
pub use health_client::HealthConnectClient;
pub use profile_client::ProfileClient;
pub use saved_items_client::SavedItemsClient;
