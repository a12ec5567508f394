use std::marker::PhantomData;

use bevy::prelude::*;

use crate::common::MapCursor;
use crate::store::{EntityDraft, GeoEntity};

use super::{DragVariant, OverlayStyle};

/// The overlay a drag adapter drives.
///
/// Implemented by the map widget's overlay component; tests use plain structs.
pub trait DragTarget<P> {
    /// Current position as the widget reports it, if readable
    fn drag_position(&self) -> Option<P>;
    fn style(&self) -> OverlayStyle;
    fn set_style(&mut self, style: OverlayStyle);
    fn set_draggable(&mut self, draggable: bool);
}

/// Result of a completed drag, bound to the entity the overlay represents.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEnded<V: DragVariant> {
    pub entity: GeoEntity,
    pub position: V::Position,
}

impl<V: DragVariant> DragEnded<V> {
    pub fn geometry(&self) -> String {
        V::to_geometry(&self.position)
    }

    /// Update payload carrying the new geometry with name and kind unchanged.
    pub fn into_draft(self) -> (i64, EntityDraft) {
        let geometry = self.geometry();
        let GeoEntity { id, name, kind, .. } = self.entity;
        (id, EntityDraft { name, geometry, kind })
    }
}

#[derive(Component)]
pub struct DragAdapter<V: DragVariant> {
    entity: GeoEntity,
    baseline: OverlayStyle,
    attached: bool,
    dragging: bool,
    _variant: PhantomData<V>,
}

impl<V: DragVariant> DragAdapter<V> {
    pub fn new(entity: GeoEntity) -> Self {
        Self {
            entity,
            baseline: OverlayStyle::default(),
            attached: false,
            dragging: false,
            _variant: PhantomData,
        }
    }

    pub fn entity(&self) -> &GeoEntity {
        &self.entity
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Enable dragging on the overlay and remember its resting style.
    pub fn attach(&mut self, target: &mut impl DragTarget<V::Position>) {
        if self.attached {
            return;
        }
        self.baseline = target.style();
        target.set_draggable(true);
        self.attached = true;
    }

    pub fn on_drag_start(
        &mut self,
        target: &mut impl DragTarget<V::Position>,
        cursor: &mut MapCursor,
    ) {
        if !self.attached {
            return;
        }
        self.dragging = true;
        target.set_style(V::start_style(&self.baseline));
        *cursor = MapCursor::Move;
    }

    pub fn on_drag(&mut self, target: &mut impl DragTarget<V::Position>) {
        if !self.dragging {
            return;
        }
        let current = target.style();
        target.set_style(V::drag_style(&current, &self.baseline));
    }

    /// Restore the resting style and report where the overlay was dropped.
    ///
    /// Returns `None` when the adapter is detached or the widget cannot report a
    /// position; the overlay is restored either way.
    pub fn on_drag_end(
        &mut self,
        target: &mut impl DragTarget<V::Position>,
        cursor: &mut MapCursor,
    ) -> Option<DragEnded<V>> {
        if !self.attached {
            return None;
        }
        self.dragging = false;
        target.set_style(self.baseline);
        *cursor = MapCursor::Default;

        let Some(position) = target.drag_position() else {
            warn!(
                "Drag ended on entity {} without a readable position",
                self.entity.id
            );
            return None;
        };

        debug!("Entity {} dropped at {:?}", self.entity.id, position);
        Some(DragEnded {
            entity: self.entity.clone(),
            position,
        })
    }

    /// Disable dragging and stop reacting to lifecycle events.
    pub fn detach(&mut self, target: &mut impl DragTarget<V::Position>) {
        if !self.attached {
            return;
        }
        if self.dragging {
            target.set_style(self.baseline);
            self.dragging = false;
        }
        target.set_draggable(false);
        self.attached = false;
    }
}
