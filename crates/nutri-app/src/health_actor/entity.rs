//! RemoteEntity implementation for [`HealthConnectStatus`].

use super::actions::HealthAction;
use super::error::HealthConnectError;
use crate::model::{HealthConnectStatus, HealthPermissions};
use chrono::Utc;
use resource_hooks::RemoteEntity;
use std::convert::Infallible;

impl RemoteEntity for HealthConnectStatus {
    type Patch = Infallible;
    type ItemId = Infallible;
    type Action = HealthAction;
    type Error = HealthConnectError;

    fn apply_patch(&mut self, patch: Infallible) -> Result<(), HealthConnectError> {
        match patch {}
    }

    fn remove_item(&mut self, id: &Infallible) -> Result<(), HealthConnectError> {
        match *id {}
    }

    /// # Actions
    /// - `Connect`: marks the link as connected with every permission granted
    /// - `Disconnect`: clears the link and all permissions, keeps the last sync time
    /// - `Sync`: records the current time; rejected while disconnected
    fn handle_action(&mut self, action: HealthAction) -> Result<(), HealthConnectError> {
        match action {
            HealthAction::Connect => {
                self.is_connected = true;
                self.permissions = HealthPermissions::all();
            }
            HealthAction::Disconnect => {
                self.is_connected = false;
                self.permissions = HealthPermissions::default();
            }
            HealthAction::Sync => {
                if !self.is_connected {
                    return Err(HealthConnectError::NotConnected);
                }
                self.last_synced_at = Some(Utc::now());
            }
        }
        Ok(())
    }
}
