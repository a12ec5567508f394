//! Overlay components: one ECS entity per rendered store entity.

use bevy::prelude::*;

use crate::drag::{DragTarget, OverlayStyle, PointDragAdapter, PolygonDragAdapter};
use crate::filter::{FilterState, HiddenSet};
use crate::geometry::{decode, EntityKind, LatLng};
use crate::store::{EntityCollection, GeoEntity};

use super::projection::offset;

/// Geometry of an overlay in widget (lat, lng) order
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayShape {
    Marker(LatLng),
    Polyline(Vec<LatLng>),
    /// Ring as stored, closing vertex included
    Polygon(Vec<LatLng>),
}

impl OverlayShape {
    /// Decode an entity's geometry; `None` when nothing is renderable.
    pub fn from_entity(entity: &GeoEntity) -> Option<Self> {
        let positions = decode(&entity.geometry, entity.kind);
        match entity.kind {
            EntityKind::Point => positions.first().copied().map(OverlayShape::Marker),
            EntityKind::Line if positions.len() >= 2 => Some(OverlayShape::Polyline(positions)),
            EntityKind::Polygon if positions.len() >= 3 => Some(OverlayShape::Polygon(positions)),
            _ => None,
        }
    }

    pub fn vertices(&self) -> &[LatLng] {
        match self {
            OverlayShape::Marker(position) => std::slice::from_ref(position),
            OverlayShape::Polyline(points) | OverlayShape::Polygon(points) => points,
        }
    }

    /// Where an info popup points: the marker itself, or the mean vertex
    pub fn anchor(&self) -> LatLng {
        let vertices = match self {
            OverlayShape::Marker(position) => return *position,
            OverlayShape::Polyline(points) => points.as_slice(),
            OverlayShape::Polygon(ring) => match ring.split_last() {
                Some((last, open)) if ring.first() == Some(last) && !open.is_empty() => open,
                _ => ring.as_slice(),
            },
        };
        let count = vertices.len().max(1) as f64;
        let (lat, lng) = vertices
            .iter()
            .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
        LatLng::new(lat / count, lng / count)
    }

    /// Translate every vertex by a world-space offset
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            OverlayShape::Marker(position) => *position = offset(*position, delta),
            OverlayShape::Polyline(points) | OverlayShape::Polygon(points) => {
                for point in points.iter_mut() {
                    *point = offset(*point, delta);
                }
            }
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct MapOverlay {
    pub entity_id: i64,
    pub kind: EntityKind,
    pub shape: OverlayShape,
    pub style: OverlayStyle,
    pub draggable: bool,
}

impl MapOverlay {
    pub fn from_entity(entity: &GeoEntity) -> Option<Self> {
        let shape = OverlayShape::from_entity(entity)?;
        Some(Self {
            entity_id: entity.id,
            kind: entity.kind,
            shape,
            style: OverlayStyle::default(),
            draggable: false,
        })
    }
}

impl DragTarget<LatLng> for MapOverlay {
    fn drag_position(&self) -> Option<LatLng> {
        match &self.shape {
            OverlayShape::Marker(position) => Some(*position),
            _ => None,
        }
    }

    fn style(&self) -> OverlayStyle {
        self.style
    }

    fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
    }

    fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }
}

impl DragTarget<Vec<LatLng>> for MapOverlay {
    fn drag_position(&self) -> Option<Vec<LatLng>> {
        match &self.shape {
            OverlayShape::Polygon(ring) if !ring.is_empty() => Some(ring.clone()),
            _ => None,
        }
    }

    fn style(&self) -> OverlayStyle {
        self.style
    }

    fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
    }

    fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }
}

/// Set when the collection or the visibility inputs change.
#[derive(Resource, Default)]
pub struct OverlaysDirty(pub bool);

pub fn mark_overlays_dirty(
    collection: Res<EntityCollection>,
    filter: Res<FilterState>,
    hidden: Res<HiddenSet>,
    mut dirty: ResMut<OverlaysDirty>,
) {
    if collection.is_changed() || filter.is_changed() || hidden.is_changed() {
        dirty.0 = true;
    }
}

/// Entities the map should show: filter-visible and not hidden by the operator.
pub fn rendered_entities<'a>(
    entities: &'a [GeoEntity],
    filter: &FilterState,
    hidden: &HiddenSet,
) -> Vec<&'a GeoEntity> {
    filter
        .visible(entities)
        .into_iter()
        .filter(|entity| !hidden.contains(entity.id))
        .collect()
}

type OverlayWithAdapters = (
    Entity,
    &'static mut MapOverlay,
    Option<&'static mut PointDragAdapter>,
    Option<&'static mut PolygonDragAdapter>,
);

/// Rebuild overlays from the collection. Deferred while a drag is in progress.
pub fn sync_overlays(
    mut commands: Commands,
    collection: Res<EntityCollection>,
    filter: Res<FilterState>,
    hidden: Res<HiddenSet>,
    pointer: Res<super::PointerState>,
    mut dirty: ResMut<OverlaysDirty>,
    mut existing: Query<OverlayWithAdapters>,
) {
    if !dirty.0 || pointer.is_dragging() {
        return;
    }
    dirty.0 = false;

    for (entity, mut overlay, point_adapter, polygon_adapter) in existing.iter_mut() {
        if let Some(mut adapter) = point_adapter {
            adapter.detach(&mut *overlay);
        }
        if let Some(mut adapter) = polygon_adapter {
            adapter.detach(&mut *overlay);
        }
        commands.entity(entity).despawn();
    }

    let mut spawned = 0;
    for entity in rendered_entities(collection.entities(), &filter, &hidden) {
        let Some(mut overlay) = MapOverlay::from_entity(entity) else {
            continue;
        };
        spawned += 1;

        match entity.kind {
            EntityKind::Point => {
                let mut adapter = PointDragAdapter::new(entity.clone());
                adapter.attach(&mut overlay);
                commands.spawn((overlay, adapter));
            }
            EntityKind::Polygon => {
                let mut adapter = PolygonDragAdapter::new(entity.clone());
                adapter.attach(&mut overlay);
                commands.spawn((overlay, adapter));
            }
            EntityKind::Line => {
                commands.spawn(overlay);
            }
        }
    }

    debug!("Map overlays rebuilt: {} shown", spawned);
}
