//! # Saved-Items Backend
//!
//! Two mock remotes, one per bookmarked list. Screens load both lists together and
//! remove entries one at a time.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SavedItemsClient;
use crate::model::{MenuList, RestaurantList};
use resource_hooks::RemoteActor;
use std::time::Duration;

/// The pair of backends behind [`SavedItemsClient`].
pub struct SavedActors {
    pub restaurants: RemoteActor<RestaurantList>,
    pub menus: RemoteActor<MenuList>,
}

/// Creates both saved-list backends seeded with their samples and the combined client.
pub fn new(buffer_size: usize, latency: Duration) -> (SavedActors, SavedItemsClient) {
    let (restaurants, restaurant_client) = RemoteActor::new(RestaurantList::sample(), buffer_size);
    let (menus, menu_client) = RemoteActor::new(MenuList::sample(), buffer_size);
    let actors = SavedActors {
        restaurants: restaurants.with_latency(latency),
        menus: menus.with_latency(latency),
    };
    (actors, SavedItemsClient::new(restaurant_client, menu_client))
}
