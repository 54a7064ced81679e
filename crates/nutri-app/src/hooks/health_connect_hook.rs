//! Health Connect settings hook. All three actions share the `is_toggling` flag.
use super::FeatureHook;
use crate::clients::HealthConnectClient;
use crate::model::HealthConnectStatus;
use resource_hooks::{MountScope, Outcome, ResourceHook, StalePolicy};

pub const LOAD_FAILED: &str = "Failed to load Health Connect status";
pub const CONNECT_FAILED: &str = "Failed to connect Health Connect";
pub const DISCONNECT_FAILED: &str = "Failed to disconnect Health Connect";
pub const SYNC_FAILED: &str = "Failed to sync Health Connect";

#[derive(Clone)]
pub struct HealthConnectHook {
    hook: ResourceHook<HealthConnectStatus>,
    client: HealthConnectClient,
}

impl HealthConnectHook {
    pub fn mount(client: HealthConnectClient, scope: &MountScope, policy: StalePolicy) -> Self {
        let hook = ResourceHook::builder("Health Connect status", client.clone())
            .fetch_error(LOAD_FAILED)
            .policy(policy)
            .mount(scope);
        Self { hook, client }
    }

    pub fn status(&self) -> Option<HealthConnectStatus> {
        self.hook.data()
    }

    pub fn is_toggling(&self) -> bool {
        self.hook.snapshot().is_busy
    }

    pub async fn connect(&self) -> Outcome {
        self.hook
            .mutate("connect", CONNECT_FAILED, self.client.connect())
            .await
    }

    pub async fn disconnect(&self) -> Outcome {
        self.hook
            .mutate("disconnect", DISCONNECT_FAILED, self.client.disconnect())
            .await
    }

    pub async fn sync(&self) -> Outcome {
        self.hook
            .mutate("sync", SYNC_FAILED, self.client.sync())
            .await
    }
}

impl FeatureHook for HealthConnectHook {
    type Data = HealthConnectStatus;

    fn resource(&self) -> &ResourceHook<HealthConnectStatus> {
        &self.hook
    }
}
