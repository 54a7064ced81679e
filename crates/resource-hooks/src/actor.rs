//! # Mock Remote Backend
//!
//! [`RemoteActor`] stands in for a real HTTP service. It owns one fixture document,
//! answers every request after a configurable latency and processes requests
//! sequentially, so no locking is needed around the document.

use crate::client::RemoteClient;
use crate::entity::RemoteEntity;
use crate::error::AdapterError;
use crate::message::RemoteRequest;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of a simulated remote service.
///
/// # Usage Pattern
///
/// 1.  **Create**: `RemoteActor::new(fixture, buffer)` returns the actor and its client.
/// 2.  **Tune**: optionally add latency with [`RemoteActor::with_latency`].
/// 3.  **Run**: spawn `actor.run()` on the runtime.
///
/// ```rust
/// use resource_hooks::{RemoteActor, RemoteEntity};
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)]
/// struct Counter { value: u32 }
///
/// impl RemoteEntity for Counter {
///     type Patch = u32;
///     type ItemId = Infallible;
///     type Action = Infallible;
///     type Error = Infallible;
///
///     fn apply_patch(&mut self, patch: u32) -> Result<(), Infallible> {
///         self.value = patch;
///         Ok(())
///     }
///     fn remove_item(&mut self, id: &Infallible) -> Result<(), Infallible> { match *id {} }
///     fn handle_action(&mut self, action: Infallible) -> Result<(), Infallible> { match action {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RemoteActor::new(Counter { value: 1 }, 8);
///     tokio::spawn(actor.run());
///
///     let updated = client.update(7).await.unwrap();
///     assert_eq!(updated.value, 7);
/// }
/// ```
pub struct RemoteActor<T: RemoteEntity> {
    receiver: mpsc::Receiver<RemoteRequest<T>>,
    document: T,
    latency: Duration,
    pending_fault: Option<String>,
}

impl<T: RemoteEntity> RemoteActor<T> {
    /// Creates a backend serving `fixture` and the client that talks to it.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(fixture: T, buffer_size: usize) -> (Self, RemoteClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            document: fixture,
            latency: Duration::ZERO,
            pending_fault: None,
        };
        (actor, RemoteClient::new(sender))
    }

    /// Delay applied before answering each request.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, latency_ms = self.latency.as_millis() as u64, "Remote started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RemoteRequest::FailNext { reason, respond_to } => {
                    debug!(entity_type, %reason, "Fault armed");
                    self.pending_fault = Some(reason);
                    let _ = respond_to.send(Ok(()));
                }
                RemoteRequest::Get { respond_to } => {
                    let fault = self.settle().await;
                    debug!(entity_type, "Get");
                    let _ = respond_to.send(match fault {
                        Some(reason) => Err(AdapterError::Remote(reason)),
                        None => Ok(self.document.clone()),
                    });
                }
                RemoteRequest::Update { patch, respond_to } => {
                    let fault = self.settle().await;
                    debug!(entity_type, ?patch, "Update");
                    let result = match fault {
                        Some(reason) => Err(AdapterError::Remote(reason)),
                        None => self.write(entity_type, |doc| doc.apply_patch(patch)),
                    };
                    let _ = respond_to.send(result);
                }
                RemoteRequest::Remove { id, respond_to } => {
                    let fault = self.settle().await;
                    debug!(entity_type, %id, "Remove");
                    let result = match fault {
                        Some(reason) => Err(AdapterError::Remote(reason)),
                        None => self
                            .write(entity_type, |doc| doc.remove_item(&id))
                            .map(|_| ()),
                    };
                    let _ = respond_to.send(result);
                }
                RemoteRequest::Action { action, respond_to } => {
                    let fault = self.settle().await;
                    debug!(entity_type, ?action, "Action");
                    let result = match fault {
                        Some(reason) => Err(AdapterError::Remote(reason)),
                        None => self.write(entity_type, |doc| doc.handle_action(action)),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, "Remote shutdown");
    }

    /// Waits out the configured latency and consumes an armed fault, if any.
    async fn settle(&mut self) -> Option<String> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.pending_fault.take()
    }

    /// Applies `op` to a scratch copy and commits it only if it succeeds, so a rejected
    /// write leaves the stored document untouched.
    fn write(
        &mut self,
        entity_type: &str,
        op: impl FnOnce(&mut T) -> Result<(), T::Error>,
    ) -> Result<T, AdapterError> {
        let mut draft = self.document.clone();
        match op(&mut draft) {
            Ok(()) => {
                self.document = draft;
                info!(entity_type, "Written");
                Ok(self.document.clone())
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Write rejected");
                Err(AdapterError::Rejected(e.to_string()))
            }
        }
    }
}
