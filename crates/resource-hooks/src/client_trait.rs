//! # ServiceClient Trait
//!
//! Domain services wrap a [`RemoteClient`] and speak their own error type. This trait
//! supplies the shared plumbing: a default `fetch` built on the inner client and a
//! single `map_error` hook.
use crate::{AdapterError, RemoteClient, RemoteEntity};
use async_trait::async_trait;

/// Trait for domain-specific service wrappers.
///
/// # Example
///
/// ```rust
/// use resource_hooks::{AdapterError, RemoteClient, RemoteEntity, ServiceClient};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)]
/// struct Settings { units: String }
///
/// impl RemoteEntity for Settings {
///     type Patch = String;
///     type ItemId = Infallible;
///     type Action = Infallible;
///     type Error = Infallible;
///     fn apply_patch(&mut self, units: String) -> Result<(), Infallible> { self.units = units; Ok(()) }
///     fn remove_item(&mut self, id: &Infallible) -> Result<(), Infallible> { match *id {} }
///     fn handle_action(&mut self, action: Infallible) -> Result<(), Infallible> { match action {} }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("settings unavailable: {0}")]
/// struct SettingsError(String);
///
/// struct SettingsService { inner: RemoteClient<Settings> }
///
/// #[async_trait]
/// impl ServiceClient<Settings> for SettingsService {
///     type Error = SettingsError;
///     fn inner(&self) -> &RemoteClient<Settings> { &self.inner }
///     fn map_error(e: AdapterError) -> SettingsError { SettingsError(e.to_string()) }
/// }
///
/// async fn usage(service: SettingsService) {
///     // fetch() is provided automatically
///     let _ = service.fetch().await;
/// }
/// ```
#[async_trait]
pub trait ServiceClient<T: RemoteEntity>: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &RemoteClient<T>;

    /// Map adapter errors to the domain error type.
    fn map_error(e: AdapterError) -> Self::Error;

    /// Fetch the whole document.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get().await.map_err(Self::map_error)
    }
}
