//! # Profile Client
//!
//! Provides a high-level API for the profile backend. It wraps a
//! `RemoteClient<Profile>` and exposes domain-specific methods.
use crate::model::{Profile, ProfilePatch};
use crate::profile_actor::ProfileError;
use async_trait::async_trait;
use resource_hooks::{AdapterError, PatchAdapter, ReadAdapter, RemoteClient, ServiceClient};

/// Client for interacting with the profile backend.
#[derive(Clone)]
pub struct ProfileClient {
    inner: RemoteClient<Profile>,
}

impl ProfileClient {
    pub fn new(inner: RemoteClient<Profile>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ServiceClient<Profile> for ProfileClient {
    type Error = ProfileError;

    fn inner(&self) -> &RemoteClient<Profile> {
        &self.inner
    }

    fn map_error(e: AdapterError) -> Self::Error {
        ProfileError::ActorCommunicationError(e.to_string())
    }
}

#[async_trait]
impl ReadAdapter<Profile> for ProfileClient {
    async fn get(&self) -> Result<Profile, AdapterError> {
        self.inner.get().await
    }
}

#[async_trait]
impl PatchAdapter<Profile> for ProfileClient {
    type Patch = ProfilePatch;

    async fn update(&self, patch: ProfilePatch) -> Result<Profile, AdapterError> {
        self.inner.update(patch).await
    }
}
