//! Dietary-preferences backend: diets, allergens, dislikes and the daily calorie target.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DietaryClient;
use crate::model::DietaryProfile;
use resource_hooks::RemoteActor;
use std::time::Duration;

/// Creates a new Dietary backend seeded with [`DietaryProfile::sample`] and its client.
pub fn new(buffer_size: usize, latency: Duration) -> (RemoteActor<DietaryProfile>, DietaryClient) {
    let (actor, generic_client) = RemoteActor::new(DietaryProfile::sample(), buffer_size);
    (actor.with_latency(latency), DietaryClient::new(generic_client))
}
