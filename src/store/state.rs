//! Requests, results and the client-side entity collection.

use std::collections::HashSet;
use std::sync::Arc;

use bevy::prelude::*;
use bevy::tasks::Task;

use super::api::EntityStore;
use super::types::{EntityDraft, GeoEntity};

/// What caused an update, so the settle can clear the right markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOrigin {
    Form,
    Drag,
}

/// Message asking the store plugin to run one remote call.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum StoreRequest {
    Refresh,
    Create(EntityDraft),
    Update {
        id: i64,
        draft: EntityDraft,
        origin: UpdateOrigin,
    },
    Delete {
        id: i64,
    },
}

impl StoreRequest {
    pub fn updated_id(&self) -> Option<i64> {
        match self {
            StoreRequest::Update { id, .. } => Some(*id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreOutcome {
    Listed(Vec<GeoEntity>),
    Created(GeoEntity),
    Updated(GeoEntity),
    Deleted { id: i64, message: String },
}

/// Exactly one per issued request.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreResult {
    pub request: StoreRequest,
    pub outcome: Result<StoreOutcome, String>,
}

impl StoreResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().err().map(String::as_str)
    }
}

/// Run one request against the store. Blocking.
pub fn execute(store: &dyn EntityStore, request: StoreRequest) -> StoreResult {
    let outcome = match &request {
        StoreRequest::Refresh => store.list().map(StoreOutcome::Listed),
        StoreRequest::Create(draft) => store.create(draft).map(StoreOutcome::Created),
        StoreRequest::Update { id, draft, .. } => store.update(*id, draft).map(StoreOutcome::Updated),
        StoreRequest::Delete { id } => store
            .delete(*id)
            .map(|message| StoreOutcome::Deleted { id: *id, message }),
    };
    StoreResult { request, outcome }
}

/// Broadcast after a result has been applied to the collection.
#[derive(Message, Debug, Clone)]
pub struct StoreSettled(pub StoreResult);

/// Shared handle to the store used by spawned tasks.
#[derive(Resource, Clone)]
pub struct StoreClient(pub Arc<dyn EntityStore>);

/// In-flight remote call
#[derive(Component)]
pub struct StoreTask(pub Task<StoreResult>);

/// Client-side copy of the store's entities.
///
/// Only successful results touch it, so change detection on this resource means
/// "the entities changed". Request bookkeeping lives in [`StoreStatus`].
#[derive(Resource, Debug, Default)]
pub struct EntityCollection {
    entities: Vec<GeoEntity>,
}

impl EntityCollection {
    pub fn entities(&self) -> &[GeoEntity] {
        &self.entities
    }

    pub fn get(&self, id: i64) -> Option<&GeoEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Replace-on-success: failures leave the entities untouched.
    pub fn apply(&mut self, result: &StoreResult) {
        let Ok(outcome) = &result.outcome else {
            return;
        };

        match outcome {
            StoreOutcome::Listed(entities) => self.entities = entities.clone(),
            StoreOutcome::Created(entity) => self.entities.push(entity.clone()),
            StoreOutcome::Updated(entity) => {
                if let Some(existing) = self.entities.iter_mut().find(|e| e.id == entity.id) {
                    *existing = entity.clone();
                } else {
                    warn!("Updated entity {} is not in the collection", entity.id);
                }
            }
            StoreOutcome::Deleted { id, .. } => self.entities.retain(|e| e.id != *id),
        }
    }
}

/// Loading flag and last error of the remote store
#[derive(Resource, Debug, Default)]
pub struct StoreStatus {
    /// A refresh is in flight
    pub loading: bool,
    /// Message of the last failed request
    pub error: Option<String>,
}

impl StoreStatus {
    pub fn apply(&mut self, result: &StoreResult) {
        if matches!(result.request, StoreRequest::Refresh) {
            self.loading = false;
        }
        self.error = result.error().map(str::to_string);
    }
}

/// Entity ids with a drag-triggered update in flight.
///
/// Last write wins per id: any settling update for the id clears it.
#[derive(Resource, Debug, Default)]
pub struct PendingDrags {
    ids: HashSet<i64>,
}

impl PendingDrags {
    pub fn mark(&mut self, id: i64) {
        self.ids.insert(id);
    }

    pub fn settle(&mut self, id: i64) {
        self.ids.remove(&id);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
