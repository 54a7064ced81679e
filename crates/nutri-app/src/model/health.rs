use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Data categories the user granted to the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPermissions {
    pub steps: bool,
    pub heart_rate: bool,
    pub sleep: bool,
}

impl HealthPermissions {
    pub fn all() -> Self {
        Self {
            steps: true,
            heart_rate: true,
            sleep: true,
        }
    }

    pub fn all_granted(&self) -> bool {
        self.steps && self.heart_rate && self.sleep
    }
}

/// Link state between the app and the platform health store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthConnectStatus {
    pub is_connected: bool,
    pub permissions: HealthPermissions,
    pub last_synced_at: Option<DateTime<Utc>>,
}
