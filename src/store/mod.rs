//! Remote entity store: HTTP client, request tasks and the client-side collection.
//!
//! Other plugins write [`StoreRequest`] messages and read [`StoreSettled`] ones; every
//! request settles exactly once, success or failure.

mod api;
mod state;
mod systems;
#[cfg(test)]
mod tests;
mod types;

pub use api::{ApiClient, EntityStore, NETWORK_ERROR};
pub use state::{
    execute, EntityCollection, PendingDrags, StoreClient, StoreOutcome, StoreRequest,
    StoreResult, StoreSettled, StoreStatus, StoreTask, UpdateOrigin,
};
pub use systems::apply_store_result;
pub use types::{ApiResponse, EntityDraft, GeoEntity};

use bevy::prelude::*;

use crate::config::ConfigLoaded;

/// Runs after the store has applied results for the frame
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreSync;

pub struct StorePlugin;

impl Plugin for StorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EntityCollection>()
            .init_resource::<StoreStatus>()
            .init_resource::<PendingDrags>()
            .add_message::<StoreRequest>()
            .add_message::<StoreSettled>()
            .add_systems(
                Startup,
                systems::configure_store_client.after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (systems::spawn_store_tasks, systems::poll_store_tasks)
                    .chain()
                    .in_set(StoreSync),
            );
    }
}
