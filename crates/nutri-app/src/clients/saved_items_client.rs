//! # Saved-Items Client
//!
//! Fronts the two saved-list backends. Reads join both lists in parallel; removals go to
//! the backend owning the id's list.
use crate::model::{MenuId, MenuList, RestaurantId, RestaurantList, SavedItems};
use crate::saved_actor::SavedItemsError;
use async_trait::async_trait;
use resource_hooks::{fetch_joined, AdapterError, ReadAdapter, RemoteClient, RemoveAdapter};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct SavedItemsClient {
    restaurants: RemoteClient<RestaurantList>,
    menus: RemoteClient<MenuList>,
}

impl SavedItemsClient {
    pub fn new(restaurants: RemoteClient<RestaurantList>, menus: RemoteClient<MenuList>) -> Self {
        Self { restaurants, menus }
    }

    pub fn restaurants(&self) -> &RemoteClient<RestaurantList> {
        &self.restaurants
    }

    pub fn menus(&self) -> &RemoteClient<MenuList> {
        &self.menus
    }

    /// Loads both lists; fails as a whole if either backend fails.
    #[instrument(skip(self))]
    pub async fn fetch_saved(&self) -> Result<SavedItems, SavedItemsError> {
        debug!("Sending request");
        self.get().await.map_err(Self::map_error)
    }

    pub fn map_error(e: AdapterError) -> SavedItemsError {
        SavedItemsError::ActorCommunicationError(e.to_string())
    }
}

#[async_trait]
impl ReadAdapter<SavedItems> for SavedItemsClient {
    async fn get(&self) -> Result<SavedItems, AdapterError> {
        let (restaurants, menus): (RestaurantList, MenuList) =
            fetch_joined(&self.restaurants, &self.menus).await?;
        Ok(SavedItems {
            restaurants: restaurants.items,
            menus: menus.items,
        })
    }
}

#[async_trait]
impl RemoveAdapter<RestaurantId> for SavedItemsClient {
    async fn remove(&self, id: RestaurantId) -> Result<(), AdapterError> {
        self.restaurants.remove(id).await
    }
}

#[async_trait]
impl RemoveAdapter<MenuId> for SavedItemsClient {
    async fn remove(&self, id: MenuId) -> Result<(), AdapterError> {
        self.menus.remove(id).await
    }
}
