//! Session store. Signing out removes the persisted session.
use super::PersistedValue;
use crate::model::Session;
use crate::storage::{KeyValueStore, PersistHandle, SESSION_KEY};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

pub struct AuthStore {
    session: PersistedValue<Option<Session>>,
}

impl AuthStore {
    pub fn new(source: Arc<dyn KeyValueStore>, persist: PersistHandle) -> Self {
        Self {
            session: PersistedValue::new(SESSION_KEY, None, source, persist),
        }
    }

    pub async fn hydrate(&self) {
        self.session.hydrate().await
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.get().is_some()
    }

    pub fn sign_in(&self, session: Session) {
        info!(user_id = %session.user_id, "Signed in");
        self.session.set(Some(session))
    }

    pub fn sign_out(&self) {
        info!("Signed out");
        self.session.set(None)
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }
}
