use super::PersistedValue;
use crate::model::Language;
use crate::storage::{KeyValueStore, PersistHandle, LANGUAGE_KEY};
use std::sync::Arc;
use tokio::sync::watch;

pub struct LanguageStore {
    language: PersistedValue<Language>,
}

impl LanguageStore {
    pub fn new(source: Arc<dyn KeyValueStore>, persist: PersistHandle) -> Self {
        Self {
            language: PersistedValue::new(LANGUAGE_KEY, Language::default(), source, persist),
        }
    }

    pub async fn hydrate(&self) {
        self.language.hydrate().await
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language)
    }

    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.language.subscribe()
    }
}
