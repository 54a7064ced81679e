//! # Health Connect Client
//!
//! Wraps a `RemoteClient<HealthConnectStatus>`; each action resolves with the full
//! resulting status.
use crate::health_actor::{HealthAction, HealthConnectError};
use crate::model::HealthConnectStatus;
use async_trait::async_trait;
use resource_hooks::{AdapterError, ReadAdapter, RemoteClient, ServiceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct HealthConnectClient {
    inner: RemoteClient<HealthConnectStatus>,
}

impl HealthConnectClient {
    pub fn new(inner: RemoteClient<HealthConnectStatus>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<HealthConnectStatus, AdapterError> {
        debug!("Sending request");
        self.inner.perform(HealthAction::Connect).await
    }

    #[instrument(skip(self))]
    pub async fn disconnect(&self) -> Result<HealthConnectStatus, AdapterError> {
        debug!("Sending request");
        self.inner.perform(HealthAction::Disconnect).await
    }

    #[instrument(skip(self))]
    pub async fn sync(&self) -> Result<HealthConnectStatus, AdapterError> {
        debug!("Sending request");
        self.inner.perform(HealthAction::Sync).await
    }
}

#[async_trait]
impl ServiceClient<HealthConnectStatus> for HealthConnectClient {
    type Error = HealthConnectError;

    fn inner(&self) -> &RemoteClient<HealthConnectStatus> {
        &self.inner
    }

    fn map_error(e: AdapterError) -> Self::Error {
        HealthConnectError::ActorCommunicationError(e.to_string())
    }
}

#[async_trait]
impl ReadAdapter<HealthConnectStatus> for HealthConnectClient {
    async fn get(&self) -> Result<HealthConnectStatus, AdapterError> {
        self.inner.get().await
    }
}
