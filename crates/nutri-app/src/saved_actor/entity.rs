//! RemoteEntity implementations for the saved lists. Both only support removal by id.

use super::error::SavedItemsError;
use crate::model::{MenuId, MenuList, RestaurantId, RestaurantList};
use resource_hooks::{remove_by_id, RemoteEntity};
use std::convert::Infallible;

impl RemoteEntity for RestaurantList {
    type Patch = Infallible;
    type ItemId = RestaurantId;
    type Action = Infallible;
    type Error = SavedItemsError;

    fn apply_patch(&mut self, patch: Infallible) -> Result<(), SavedItemsError> {
        match patch {}
    }

    /// # Errors
    /// `NotFound` if no restaurant has this id.
    fn remove_item(&mut self, id: &RestaurantId) -> Result<(), SavedItemsError> {
        match remove_by_id(&mut self.items, id) {
            0 => Err(SavedItemsError::NotFound(id.to_string())),
            _ => Ok(()),
        }
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), SavedItemsError> {
        match action {}
    }
}

impl RemoteEntity for MenuList {
    type Patch = Infallible;
    type ItemId = MenuId;
    type Action = Infallible;
    type Error = SavedItemsError;

    fn apply_patch(&mut self, patch: Infallible) -> Result<(), SavedItemsError> {
        match patch {}
    }

    fn remove_item(&mut self, id: &MenuId) -> Result<(), SavedItemsError> {
        match remove_by_id(&mut self.items, id) {
            0 => Err(SavedItemsError::NotFound(id.to_string())),
            _ => Ok(()),
        }
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), SavedItemsError> {
        match action {}
    }
}
