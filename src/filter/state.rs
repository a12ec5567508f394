use std::collections::{BTreeSet, HashSet};

use bevy::prelude::*;

use crate::geometry::EntityKind;
use crate::store::GeoEntity;

/// Kind set plus committed search term.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FilterState {
    pub active_kinds: BTreeSet<EntityKind>,
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_kinds: EntityKind::all().iter().copied().collect(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    pub fn matches(&self, entity: &GeoEntity) -> bool {
        if !self.active_kinds.contains(&entity.kind) {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }
        entity
            .name
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }

    pub fn visible<'a>(&self, entities: &'a [GeoEntity]) -> Vec<&'a GeoEntity> {
        entities.iter().filter(|e| self.matches(e)).collect()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty() || self.active_kinds.len() < EntityKind::all().len()
    }

    pub fn is_kind_active(&self, kind: EntityKind) -> bool {
        self.active_kinds.contains(&kind)
    }

    pub fn toggle_kind(&mut self, kind: EntityKind) {
        if !self.active_kinds.remove(&kind) {
            self.active_kinds.insert(kind);
        }
    }

    pub fn show_all(&mut self) {
        self.active_kinds = EntityKind::all().iter().copied().collect();
    }

    pub fn hide_all(&mut self) {
        self.active_kinds.clear();
    }

    /// Reset kinds and search term.
    pub fn clear(&mut self) {
        self.show_all();
        self.search_term.clear();
    }
}

/// Entity counts per kind over the whole collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KindCounts {
    pub points: usize,
    pub lines: usize,
    pub polygons: usize,
}

impl KindCounts {
    pub fn from_entities(entities: &[GeoEntity]) -> Self {
        let mut counts = Self::default();
        for entity in entities {
            match entity.kind {
                EntityKind::Point => counts.points += 1,
                EntityKind::Line => counts.lines += 1,
                EntityKind::Polygon => counts.polygons += 1,
            }
        }
        counts
    }

    pub fn get(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Point => self.points,
            EntityKind::Line => self.lines,
            EntityKind::Polygon => self.polygons,
        }
    }
}

/// Entity ids the operator switched off on the map. Does not affect the list.
#[derive(Resource, Debug, Default, Clone)]
pub struct HiddenSet {
    ids: HashSet<i64>,
}

impl HiddenSet {
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Flip visibility, returns true if the entity is now hidden.
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Drop ids no longer present in the collection.
    pub fn retain_existing(&mut self, entities: &[GeoEntity]) {
        self.ids.retain(|id| entities.iter().any(|e| e.id == *id));
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
