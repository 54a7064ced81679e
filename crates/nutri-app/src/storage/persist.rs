//! # Persist Actor
//!
//! Stores change their in-memory value synchronously and hand the write to this actor.
//! Writes are applied one at a time in the order they were issued; a failed write is
//! logged and does not stop the loop. [`PersistHandle::flush`] resolves once every write
//! issued before it has been applied.

use super::KeyValueStore;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum PersistCommand {
    Set { key: String, value: String },
    Remove { key: String },
    Flush { respond_to: oneshot::Sender<()> },
}

pub struct PersistActor {
    receiver: mpsc::UnboundedReceiver<PersistCommand>,
    store: Arc<dyn KeyValueStore>,
}

impl PersistActor {
    pub fn new(store: Arc<dyn KeyValueStore>) -> (Self, PersistHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { receiver, store }, PersistHandle { sender })
    }

    /// Runs until every [`PersistHandle`] has been dropped.
    pub async fn run(mut self) {
        info!("Persist actor started");
        while let Some(command) = self.receiver.recv().await {
            match command {
                PersistCommand::Set { key, value } => {
                    debug!(%key, "Persisting");
                    if let Err(e) = self.store.set(&key, value).await {
                        warn!(%key, error = %e, "Persist failed");
                    }
                }
                PersistCommand::Remove { key } => {
                    debug!(%key, "Removing");
                    if let Err(e) = self.store.remove(&key).await {
                        warn!(%key, error = %e, "Remove failed");
                    }
                }
                PersistCommand::Flush { respond_to } => {
                    let _ = respond_to.send(());
                }
            }
        }
        info!("Persist actor shutdown");
    }
}

/// Cloneable sender side of the [`PersistActor`].
#[derive(Clone, Debug)]
pub struct PersistHandle {
    sender: mpsc::UnboundedSender<PersistCommand>,
}

impl PersistHandle {
    /// Queues a write. Never blocks.
    pub fn set(&self, key: &str, value: String) {
        self.send(PersistCommand::Set {
            key: key.to_string(),
            value,
        });
    }

    pub fn remove(&self, key: &str) {
        self.send(PersistCommand::Remove {
            key: key.to_string(),
        });
    }

    /// Waits until all previously queued writes have been applied.
    pub async fn flush(&self) {
        let (respond_to, done) = oneshot::channel();
        self.send(PersistCommand::Flush { respond_to });
        let _ = done.await;
    }

    fn send(&self, command: PersistCommand) {
        if self.sender.send(command).is_err() {
            warn!("Persist actor is gone, write dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_writes_applied_in_order_before_flush() {
        let store = Arc::new(MemoryStore::new());
        let (actor, handle) = PersistActor::new(store.clone());
        let task = tokio::spawn(actor.run());

        handle.set("k", "1".into());
        handle.set("k", "2".into());
        handle.set("gone", "x".into());
        handle.remove("gone");
        handle.flush().await;

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("gone").await.unwrap(), None);

        drop(handle);
        task.await.unwrap();
    }
}
