//! # Generic Client
//!
//! The client half of a [`RemoteActor`](crate::RemoteActor).

use crate::entity::RemoteEntity;
use crate::error::AdapterError;
use crate::message::RemoteRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for sending requests to a remote backend.
///
/// Holds only a channel sender, so it is cheap to clone and share across hooks.
pub struct RemoteClient<T: RemoteEntity> {
    sender: mpsc::Sender<RemoteRequest<T>>,
}

impl<T: RemoteEntity> Clone for RemoteClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: RemoteEntity> RemoteClient<T> {
    pub fn new(sender: mpsc::Sender<RemoteRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self) -> Result<T, AdapterError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RemoteRequest::Get { respond_to })
            .await
            .map_err(|_| AdapterError::ActorClosed)?;
        response.await.map_err(|_| AdapterError::ActorDropped)?
    }

    pub async fn update(&self, patch: T::Patch) -> Result<T, AdapterError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RemoteRequest::Update { patch, respond_to })
            .await
            .map_err(|_| AdapterError::ActorClosed)?;
        response.await.map_err(|_| AdapterError::ActorDropped)?
    }

    pub async fn remove(&self, id: T::ItemId) -> Result<(), AdapterError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RemoteRequest::Remove { id, respond_to })
            .await
            .map_err(|_| AdapterError::ActorClosed)?;
        response.await.map_err(|_| AdapterError::ActorDropped)?
    }

    pub async fn perform(&self, action: T::Action) -> Result<T, AdapterError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RemoteRequest::Action { action, respond_to })
            .await
            .map_err(|_| AdapterError::ActorClosed)?;
        response.await.map_err(|_| AdapterError::ActorDropped)?
    }

    /// Makes the next non-control request fail with [`AdapterError::Remote`].
    pub async fn fail_next(&self, reason: impl Into<String>) -> Result<(), AdapterError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RemoteRequest::FailNext {
                reason: reason.into(),
                respond_to,
            })
            .await
            .map_err(|_| AdapterError::ActorClosed)?;
        response.await.map_err(|_| AdapterError::ActorDropped)?
    }
}
