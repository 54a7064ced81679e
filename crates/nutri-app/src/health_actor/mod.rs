//! Health Connect backend with connect / disconnect / sync actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::HealthConnectClient;
use crate::model::HealthConnectStatus;
use resource_hooks::RemoteActor;
use std::time::Duration;

/// Creates a new Health Connect backend, initially disconnected, and its client.
pub fn new(
    buffer_size: usize,
    latency: Duration,
) -> (RemoteActor<HealthConnectStatus>, HealthConnectClient) {
    let (actor, generic_client) = RemoteActor::new(HealthConnectStatus::default(), buffer_size);
    (actor.with_latency(latency), HealthConnectClient::new(generic_client))
}
