//! Dietary-preferences screen hook.
//!
//! Allergen edits are computed against the loaded list and sent as a whole-list patch.
//! They are skipped without a remote call when nothing is loaded yet or when the edit
//! would not change the list.
use super::FeatureHook;
use crate::clients::DietaryClient;
use crate::model::{DietaryPatch, DietaryProfile};
use resource_hooks::{MountScope, Outcome, PatchAdapter, ResourceHook, StalePolicy};
use tracing::debug;

pub const LOAD_FAILED: &str = "Failed to load dietary preferences";
pub const UPDATE_FAILED: &str = "Failed to update dietary preferences";

#[derive(Clone)]
pub struct DietaryHook {
    hook: ResourceHook<DietaryProfile>,
    client: DietaryClient,
}

impl DietaryHook {
    pub fn mount(client: DietaryClient, scope: &MountScope, policy: StalePolicy) -> Self {
        let hook = ResourceHook::builder("dietary preferences", client.clone())
            .fetch_error(LOAD_FAILED)
            .policy(policy)
            .mount(scope);
        Self { hook, client }
    }

    pub fn dietary(&self) -> Option<DietaryProfile> {
        self.hook.data()
    }

    pub fn is_saving(&self) -> bool {
        self.hook.snapshot().is_busy
    }

    pub async fn update_diets(&self, diets: Vec<String>) -> Outcome {
        let patch = DietaryPatch {
            diets: Some(diets),
            ..Default::default()
        };
        self.save("update_diets", patch).await
    }

    pub async fn add_allergen(&self, allergen: &str) -> Outcome {
        let Some(current) = self.hook.data() else {
            debug!(allergen, "No dietary data loaded, add skipped");
            return Outcome::Skipped;
        };
        if current.has_allergen(allergen) {
            debug!(allergen, "Allergen already present, add skipped");
            return Outcome::Skipped;
        }

        let mut allergens = current.allergens;
        allergens.push(allergen.to_string());
        let patch = DietaryPatch {
            allergens: Some(allergens),
            ..Default::default()
        };
        self.save("add_allergen", patch).await
    }

    pub async fn remove_allergen(&self, allergen: &str) -> Outcome {
        let Some(current) = self.hook.data() else {
            debug!(allergen, "No dietary data loaded, remove skipped");
            return Outcome::Skipped;
        };
        if !current.has_allergen(allergen) {
            debug!(allergen, "Allergen not present, remove skipped");
            return Outcome::Skipped;
        }

        let allergens = current
            .allergens
            .into_iter()
            .filter(|a| a != allergen)
            .collect();
        let patch = DietaryPatch {
            allergens: Some(allergens),
            ..Default::default()
        };
        self.save("remove_allergen", patch).await
    }

    /// Sends an arbitrary patch, e.g. dislikes and calorie target from the edit form.
    pub async fn update_preferences(&self, patch: DietaryPatch) -> Outcome {
        self.save("update_preferences", patch).await
    }

    async fn save(&self, action: &'static str, patch: DietaryPatch) -> Outcome {
        self.hook
            .mutate(action, UPDATE_FAILED, self.client.update(patch))
            .await
    }
}

impl FeatureHook for DietaryHook {
    type Data = DietaryProfile;

    fn resource(&self) -> &ResourceHook<DietaryProfile> {
        &self.hook
    }
}
