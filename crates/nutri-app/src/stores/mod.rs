//! # App-Wide Stores
//!
//! Theme, language and session state shared across screens. Each store is an explicit
//! object handed to whoever needs it:
//!
//! 1. `hydrate()` once at startup loads the persisted value. A missing entry keeps the
//!    default; an unreadable one is logged and also keeps the default.
//! 2. Setters update the in-memory value synchronously and notify subscribers.
//! 3. The new value is written through the [`PersistHandle`](crate::storage::PersistHandle)
//!    in the background.

pub mod auth;
pub mod language;
pub mod persisted;
pub mod theme;

pub use auth::AuthStore;
pub use language::LanguageStore;
pub use persisted::PersistedValue;
pub use theme::ThemeStore;
