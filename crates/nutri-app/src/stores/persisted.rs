use crate::storage::{KeyValueStore, PersistHandle};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// A value stored under one key, observable through a `watch` channel.
///
/// `None` is persisted as a removed key.
pub struct PersistedValue<V> {
    key: &'static str,
    value: watch::Sender<V>,
    source: Arc<dyn KeyValueStore>,
    persist: PersistHandle,
    hydrated: AtomicBool,
}

impl<V> PersistedValue<V>
where
    V: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(
        key: &'static str,
        initial: V,
        source: Arc<dyn KeyValueStore>,
        persist: PersistHandle,
    ) -> Self {
        let (value, _) = watch::channel(initial);
        Self {
            key,
            value,
            source,
            persist,
            hydrated: AtomicBool::new(false),
        }
    }

    /// Loads the persisted value. Later calls are no-ops.
    pub async fn hydrate(&self) {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            debug!(key = self.key, "Already hydrated");
            return;
        }
        match self.source.get(self.key).await {
            Ok(Some(raw)) => match serde_json::from_str::<V>(&raw) {
                Ok(stored) => {
                    self.value.send_replace(stored);
                    info!(key = self.key, "Hydrated");
                }
                Err(e) => warn!(key = self.key, error = %e, "Stored value unreadable, using default"),
            },
            Ok(None) => debug!(key = self.key, "Nothing stored, using default"),
            Err(e) => warn!(key = self.key, error = %e, "Store read failed, using default"),
        }
    }

    pub fn get(&self) -> V {
        self.value.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<V> {
        self.value.subscribe()
    }

    /// Replaces the value and queues the write. Setting the current value does nothing.
    pub fn set(&self, next: V) {
        let changed = self.value.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next.clone();
                true
            }
        });
        if !changed {
            return;
        }
        match serde_json::to_value(&next) {
            Ok(serde_json::Value::Null) => self.persist.remove(self.key),
            Ok(encoded) => self.persist.set(self.key, encoded.to_string()),
            Err(e) => warn!(key = self.key, error = %e, "Value not persisted"),
        }
    }
}
