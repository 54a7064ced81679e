//! # Remote Adapter Contract
//!
//! The only boundary hooks talk to. An adapter performs one remote operation and
//! resolves with a typed value or an opaque [`AdapterError`]. There is no retry, no
//! timeout and no idempotency key at this layer: every failure is terminal for that
//! invocation.
//!
//! Writes always resolve with the *entire* resulting resource, never just the patch.

use crate::client::RemoteClient;
use crate::entity::RemoteEntity;
use crate::error::AdapterError;
use async_trait::async_trait;
use std::fmt::Debug;

/// Read shape: `get() -> T`.
#[async_trait]
pub trait ReadAdapter<T>: Send + Sync {
    async fn get(&self) -> Result<T, AdapterError>;
}

/// Write shape: `update(patch) -> T`.
#[async_trait]
pub trait PatchAdapter<T>: Send + Sync {
    type Patch: Send + Debug;

    async fn update(&self, patch: Self::Patch) -> Result<T, AdapterError>;
}

/// Delete shape: `remove(id) -> ()`.
#[async_trait]
pub trait RemoveAdapter<Id: Send + 'static>: Send + Sync {
    async fn remove(&self, id: Id) -> Result<(), AdapterError>;
}

#[async_trait]
impl<T: RemoteEntity> ReadAdapter<T> for RemoteClient<T> {
    async fn get(&self) -> Result<T, AdapterError> {
        RemoteClient::get(self).await
    }
}

#[async_trait]
impl<T: RemoteEntity> PatchAdapter<T> for RemoteClient<T> {
    type Patch = T::Patch;

    async fn update(&self, patch: T::Patch) -> Result<T, AdapterError> {
        RemoteClient::update(self, patch).await
    }
}

#[async_trait]
impl<T: RemoteEntity> RemoveAdapter<T::ItemId> for RemoteClient<T>
where
    T::ItemId: 'static,
{
    async fn remove(&self, id: T::ItemId) -> Result<(), AdapterError> {
        RemoteClient::remove(self, id).await
    }
}
