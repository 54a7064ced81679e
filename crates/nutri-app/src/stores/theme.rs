use super::PersistedValue;
use crate::model::ThemeMode;
use crate::storage::{KeyValueStore, PersistHandle, THEME_KEY};
use std::sync::Arc;
use tokio::sync::watch;

pub struct ThemeStore {
    mode: PersistedValue<ThemeMode>,
}

impl ThemeStore {
    pub fn new(source: Arc<dyn KeyValueStore>, persist: PersistHandle) -> Self {
        Self {
            mode: PersistedValue::new(THEME_KEY, ThemeMode::default(), source, persist),
        }
    }

    pub async fn hydrate(&self) {
        self.mode.hydrate().await
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode() == ThemeMode::Dark
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode)
    }

    /// Light and Dark swap; System goes to Dark. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let next = match self.mode() {
            ThemeMode::Light | ThemeMode::System => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.set_mode(next);
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.mode.subscribe()
    }
}
