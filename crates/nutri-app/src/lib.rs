//! # Nutri App Core
//!
//! The non-visual core of a nutrition-tracking mobile app: screen-level resource hooks
//! over mock backends, app-wide settings stores, and nutrition calculators.
//!
//! - **[model]**: Plain data ([`Profile`](model::Profile), [`DietaryProfile`](model::DietaryProfile), ...).
//! - **[profile_actor], [dietary_actor], [saved_actor], [health_actor]**: Mock backends and
//!   the [`RemoteEntity`](resource_hooks::RemoteEntity) rules they enforce.
//! - **[clients]**: Typed wrappers over [`RemoteClient`](resource_hooks::RemoteClient).
//! - **[hooks]**: One [`ResourceHook`](resource_hooks::ResourceHook) per screen resource.
//! - **[stores]** / **[storage]**: Theme, language and session, persisted in the background.
//! - **[calc]**: BMI, BMR, TDEE, calorie target and macros.
//! - **[lifecycle]**: [`AppSystem`](lifecycle::AppSystem) wiring it all together.

pub mod calc;
pub mod clients;
pub mod config;
pub mod dietary_actor;
pub mod health_actor;
pub mod hooks;
pub mod lifecycle;
pub mod model;
pub mod profile_actor;
pub mod saved_actor;
pub mod storage;
pub mod stores;
