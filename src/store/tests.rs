use std::sync::Mutex;

use super::*;
use crate::geometry::EntityKind;

/// In-memory store with an optional forced failure
#[derive(Default)]
struct FakeStore {
    entities: Mutex<Vec<GeoEntity>>,
    next_id: Mutex<i64>,
    fail_with: Option<String>,
}

impl FakeStore {
    fn seeded(entities: Vec<GeoEntity>) -> Self {
        let next = entities.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            entities: Mutex::new(entities),
            next_id: Mutex::new(next),
            fail_with: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), String> {
        match &self.fail_with {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

impl EntityStore for FakeStore {
    fn list(&self) -> Result<Vec<GeoEntity>, String> {
        self.check()?;
        Ok(self.entities.lock().unwrap().clone())
    }

    fn create(&self, draft: &EntityDraft) -> Result<GeoEntity, String> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        let entity = GeoEntity {
            id: *next_id,
            name: draft.name.clone(),
            geometry: draft.geometry.clone(),
            kind: draft.kind,
        };
        *next_id += 1;
        self.entities.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    fn update(&self, id: i64, draft: &EntityDraft) -> Result<GeoEntity, String> {
        self.check()?;
        let mut entities = self.entities.lock().unwrap();
        let entity = entities
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| "Point not found".to_string())?;
        entity.name = draft.name.clone();
        entity.geometry = draft.geometry.clone();
        entity.kind = draft.kind;
        Ok(entity.clone())
    }

    fn delete(&self, id: i64) -> Result<String, String> {
        self.check()?;
        self.entities.lock().unwrap().retain(|e| e.id != id);
        Ok("Point deleted".to_string())
    }
}

fn depot() -> GeoEntity {
    GeoEntity {
        id: 1,
        name: "Depot".to_string(),
        geometry: "28 40".to_string(),
        kind: EntityKind::Point,
    }
}

fn road() -> GeoEntity {
    GeoEntity {
        id: 2,
        name: "Road".to_string(),
        geometry: "28 40, 29 41".to_string(),
        kind: EntityKind::Line,
    }
}

fn draft(name: &str, geometry: &str, kind: EntityKind) -> EntityDraft {
    EntityDraft {
        name: name.to_string(),
        geometry: geometry.to_string(),
        kind,
    }
}

fn refreshed(store: &FakeStore) -> EntityCollection {
    let mut collection = EntityCollection::default();
    collection.apply(&execute(store, StoreRequest::Refresh));
    collection
}

#[test]
fn test_refresh_replaces_collection() {
    let store = FakeStore::seeded(vec![depot(), road()]);
    let collection = refreshed(&store);

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.get(2), Some(&road()));
}

#[test]
fn test_create_appends() {
    let store = FakeStore::seeded(vec![depot()]);
    let mut collection = refreshed(&store);

    let result = execute(
        &store,
        StoreRequest::Create(draft("Harbour", "29 41", EntityKind::Point)),
    );
    collection.apply(&result);

    assert!(result.is_success());
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.get(2).unwrap().name, "Harbour");
}

#[test]
fn test_update_replaces_matching_entity() {
    let store = FakeStore::seeded(vec![depot(), road()]);
    let mut collection = refreshed(&store);

    let result = execute(
        &store,
        StoreRequest::Update {
            id: 1,
            draft: draft("Depot", "29 41", EntityKind::Point),
            origin: UpdateOrigin::Drag,
        },
    );
    collection.apply(&result);

    assert_eq!(collection.get(1).unwrap().geometry, "29 41");
    assert_eq!(collection.get(2).unwrap(), &road());
    assert_eq!(result.request.updated_id(), Some(1));
}

#[test]
fn test_delete_removes() {
    let store = FakeStore::seeded(vec![depot(), road()]);
    let mut collection = refreshed(&store);

    let result = execute(&store, StoreRequest::Delete { id: 2 });
    collection.apply(&result);

    assert_eq!(collection.len(), 1);
    assert!(collection.get(2).is_none());
    assert_eq!(
        result.outcome,
        Ok(StoreOutcome::Deleted {
            id: 2,
            message: "Point deleted".to_string()
        })
    );
}

#[test]
fn test_failure_leaves_collection_untouched() {
    let store = FakeStore::seeded(vec![depot()]);
    let mut collection = refreshed(&store);
    let broken = FakeStore::failing(NETWORK_ERROR);

    let result = execute(
        &broken,
        StoreRequest::Update {
            id: 1,
            draft: draft("Depot", "30 42", EntityKind::Point),
            origin: UpdateOrigin::Drag,
        },
    );
    collection.apply(&result);

    assert_eq!(result.error(), Some(NETWORK_ERROR));
    assert_eq!(collection.get(1).unwrap().geometry, "28 40");
}

#[test]
fn test_failed_refresh_clears_loading() {
    let broken = FakeStore::failing("Server unavailable");
    let result = execute(&broken, StoreRequest::Refresh);
    let mut status = StoreStatus {
        loading: true,
        error: None,
    };
    status.apply(&result);

    assert!(!status.loading);
    assert_eq!(status.error.as_deref(), Some("Server unavailable"));
    assert!(refreshed(&broken).is_empty());
}

#[test]
fn test_success_clears_previous_error() {
    let store = FakeStore::seeded(vec![depot()]);
    let mut status = StoreStatus::default();
    status.apply(&execute(&FakeStore::failing("boom"), StoreRequest::Refresh));
    assert!(status.error.is_some());

    status.apply(&execute(&store, StoreRequest::Refresh));
    assert!(status.error.is_none());
}

#[test]
fn test_update_settle_does_not_touch_loading() {
    let store = FakeStore::seeded(vec![depot()]);
    let mut status = StoreStatus {
        loading: true,
        error: None,
    };
    status.apply(&execute(&store, StoreRequest::Delete { id: 1 }));

    assert!(status.loading);
}

#[test]
fn test_pending_drags_last_settle_wins() {
    let mut pending = PendingDrags::default();

    pending.mark(5);
    pending.mark(5);
    assert!(pending.contains(5));

    // The first of two overlapping updates settling clears the marker
    pending.settle(5);
    assert!(!pending.contains(5));
    assert!(pending.is_empty());
}
