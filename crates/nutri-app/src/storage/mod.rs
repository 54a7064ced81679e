//! # Persisted Key-Value Storage
//!
//! An opaque async string store that survives restarts, plus the actor that serialises
//! writes to it.
//!
//! - [`KeyValueStore`] - async get/set/remove by key
//! - [`MemoryStore`] - in-process map, used by tests and when no path is configured
//! - [`FileStore`] - JSON object in a single file
//! - [`PersistActor`] / [`PersistHandle`] - fire-and-forget writes applied in order

pub mod file;
pub mod memory;
pub mod persist;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use persist::{PersistActor, PersistCommand, PersistHandle};

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub const THEME_KEY: &str = "app.theme";
pub const LANGUAGE_KEY: &str = "app.language";
pub const SESSION_KEY: &str = "auth.session";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt store file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
