//! # Dietary Client
//!
//! Wraps a `RemoteClient<DietaryProfile>`.
use crate::dietary_actor::DietaryError;
use crate::model::{DietaryPatch, DietaryProfile};
use async_trait::async_trait;
use resource_hooks::{AdapterError, PatchAdapter, ReadAdapter, RemoteClient, ServiceClient};

#[derive(Clone)]
pub struct DietaryClient {
    inner: RemoteClient<DietaryProfile>,
}

impl DietaryClient {
    pub fn new(inner: RemoteClient<DietaryProfile>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ServiceClient<DietaryProfile> for DietaryClient {
    type Error = DietaryError;

    fn inner(&self) -> &RemoteClient<DietaryProfile> {
        &self.inner
    }

    fn map_error(e: AdapterError) -> Self::Error {
        DietaryError::ActorCommunicationError(e.to_string())
    }
}

#[async_trait]
impl ReadAdapter<DietaryProfile> for DietaryClient {
    async fn get(&self) -> Result<DietaryProfile, AdapterError> {
        self.inner.get().await
    }
}

#[async_trait]
impl PatchAdapter<DietaryProfile> for DietaryClient {
    type Patch = DietaryPatch;

    async fn update(&self, patch: DietaryPatch) -> Result<DietaryProfile, AdapterError> {
        self.inner.update(patch).await
    }
}
