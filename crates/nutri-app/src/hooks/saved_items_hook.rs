//! Saved restaurants and menus, loaded together and pruned one entry at a time.
use super::FeatureHook;
use crate::clients::SavedItemsClient;
use crate::model::{MenuId, RestaurantId, SavedItems, SavedMenu, SavedRestaurant};
use resource_hooks::{remove_item, MountScope, Outcome, ResourceHook, StalePolicy};

pub const LOAD_FAILED: &str = "Failed to load saved items";
pub const REMOVE_RESTAURANT_FAILED: &str = "Failed to remove restaurant";
pub const REMOVE_MENU_FAILED: &str = "Failed to remove menu";

#[derive(Clone)]
pub struct SavedItemsHook {
    hook: ResourceHook<SavedItems>,
    client: SavedItemsClient,
}

impl SavedItemsHook {
    pub fn mount(client: SavedItemsClient, scope: &MountScope, policy: StalePolicy) -> Self {
        let hook = ResourceHook::builder("saved items", client.clone())
            .fetch_error(LOAD_FAILED)
            .policy(policy)
            .mount(scope);
        Self { hook, client }
    }

    pub fn restaurants(&self) -> Vec<SavedRestaurant> {
        self.hook.data().map(|s| s.restaurants).unwrap_or_default()
    }

    pub fn menus(&self) -> Vec<SavedMenu> {
        self.hook.data().map(|s| s.menus).unwrap_or_default()
    }

    pub fn is_saving(&self) -> bool {
        self.hook.snapshot().is_busy
    }

    /// Deletes the restaurant remotely, then drops it from the local list.
    pub async fn remove_restaurant(&self, id: RestaurantId) -> Outcome {
        remove_item(
            &self.hook,
            "remove_restaurant",
            REMOVE_RESTAURANT_FAILED,
            &self.client,
            id,
            |saved: &mut SavedItems| &mut saved.restaurants,
        )
        .await
    }

    /// Deletes the menu remotely, then drops it from the local list.
    pub async fn remove_menu(&self, id: MenuId) -> Outcome {
        remove_item(
            &self.hook,
            "remove_menu",
            REMOVE_MENU_FAILED,
            &self.client,
            id,
            |saved: &mut SavedItems| &mut saved.menus,
        )
        .await
    }
}

impl FeatureHook for SavedItemsHook {
    type Data = SavedItems;

    fn resource(&self) -> &ResourceHook<SavedItems> {
        &self.hook
    }
}
