//! Custom actions for the Health Connect backend.

/// Operations on the link between the app and the platform health store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthAction {
    /// Links the store and grants every permission.
    Connect,
    /// Unlinks the store and revokes every permission.
    Disconnect,
    /// Pulls the latest data and stamps `last_synced_at`.
    ///
    /// # Errors
    /// Fails when the store is not connected.
    Sync,
}
