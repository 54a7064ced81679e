//! Profile screen hook.
use super::FeatureHook;
use crate::calc::{self, CalcError, NutritionSummary};
use crate::clients::ProfileClient;
use crate::model::{Profile, ProfilePatch};
use crate::profile_actor::ProfileError;
use resource_hooks::{MountScope, PatchAdapter, ResourceHook, ServiceClient, StalePolicy};

pub const LOAD_FAILED: &str = "Failed to load profile";
pub const UPDATE_FAILED: &str = "Failed to update profile";

#[derive(Clone)]
pub struct ProfileHook {
    hook: ResourceHook<Profile>,
    client: ProfileClient,
}

impl ProfileHook {
    pub fn mount(client: ProfileClient, scope: &MountScope, policy: StalePolicy) -> Self {
        let hook = ResourceHook::builder("profile", client.clone())
            .fetch_error(LOAD_FAILED)
            .policy(policy)
            .mount(scope);
        Self { hook, client }
    }

    pub fn profile(&self) -> Option<Profile> {
        self.hook.data()
    }

    pub fn is_saving(&self) -> bool {
        self.hook.snapshot().is_busy
    }

    /// Saves `patch` and replaces the local profile with the backend's answer.
    ///
    /// Unlike every other action, a failure is both recorded in `error` and returned.
    pub async fn update_profile(&self, patch: ProfilePatch) -> Result<Profile, ProfileError> {
        self.hook
            .mutate_or_raise("update_profile", UPDATE_FAILED, self.client.update(patch))
            .await
            .map_err(ProfileClient::map_error)
    }

    /// Energy and macro targets derived from the loaded profile, if any.
    pub fn summary(&self) -> Option<Result<NutritionSummary, CalcError>> {
        self.profile().map(|profile| calc::summarize(&profile))
    }
}

impl FeatureHook for ProfileHook {
    type Data = Profile;

    fn resource(&self) -> &ResourceHook<Profile> {
        &self.hook
    }
}
