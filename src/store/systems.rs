use std::sync::Arc;

use bevy::prelude::*;
use bevy::tasks::AsyncComputeTaskPool;
use futures_lite::future;

use crate::config::AppConfig;

use super::api::ApiClient;
use super::state::{
    execute, EntityCollection, PendingDrags, StoreClient, StoreRequest, StoreResult,
    StoreSettled, StoreStatus, StoreTask, UpdateOrigin,
};

/// Startup system: build the HTTP client from config and load the entities.
pub fn configure_store_client(
    mut commands: Commands,
    config: Res<AppConfig>,
    mut requests: MessageWriter<StoreRequest>,
) {
    let base_url = config.data.api_base().to_string();
    info!("Entity store at {}", base_url);
    commands.insert_resource(StoreClient(Arc::new(ApiClient::new(base_url))));
    requests.write(StoreRequest::Refresh);
}

/// Spawn one background task per requested call
pub fn spawn_store_tasks(
    mut commands: Commands,
    mut requests: MessageReader<StoreRequest>,
    client: Res<StoreClient>,
    mut status: ResMut<StoreStatus>,
    mut pending: ResMut<PendingDrags>,
) {
    let task_pool = AsyncComputeTaskPool::get();

    for request in requests.read() {
        match request {
            StoreRequest::Refresh => status.loading = true,
            StoreRequest::Update {
                id,
                origin: UpdateOrigin::Drag,
                ..
            } => pending.mark(*id),
            _ => {}
        }
        debug!("Store request: {:?}", request);

        let store = client.0.clone();
        let request = request.clone();
        let task = task_pool.spawn(async move { execute(store.as_ref(), request) });
        commands.spawn(StoreTask(task));
    }
}

/// Apply one finished call.
///
/// The collection is only borrowed mutably on success, so a failed drag update
/// does not flag it changed and the dropped overlay stays where it is.
pub fn apply_store_result(
    result: &StoreResult,
    collection: &mut ResMut<EntityCollection>,
    status: &mut StoreStatus,
    pending: &mut PendingDrags,
) {
    if let Some(error) = result.error() {
        warn!("Store request {:?} failed: {}", result.request, error);
    } else {
        collection.apply(result);
    }
    status.apply(result);
    if let Some(id) = result.request.updated_id() {
        pending.settle(id);
    }
}

/// Poll in-flight calls and apply finished ones
pub fn poll_store_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut StoreTask)>,
    mut collection: ResMut<EntityCollection>,
    mut status: ResMut<StoreStatus>,
    mut pending: ResMut<PendingDrags>,
    mut settled: MessageWriter<StoreSettled>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            apply_store_result(&result, &mut collection, &mut status, &mut pending);
            settled.write(StoreSettled(result));

            commands.entity(entity).despawn();
        }
    }
}
