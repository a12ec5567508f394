//! Turns overlay drags into store updates.
//!
//! The overlay is never moved back if the update fails; the next refresh of the
//! collection re-syncs it.

use bevy::prelude::*;

use crate::common::MapCursor;
use crate::drag::{PointDragAdapter, PolygonDragAdapter};
use crate::map::{MapOverlay, OverlayDrag};
use crate::store::{StoreRequest, UpdateOrigin};

type DraggableOverlay = (
    &'static mut MapOverlay,
    Option<&'static mut PointDragAdapter>,
    Option<&'static mut PolygonDragAdapter>,
);

pub fn handle_overlay_drags(
    mut drags: MessageReader<OverlayDrag>,
    mut overlays: Query<DraggableOverlay>,
    mut cursor: ResMut<MapCursor>,
    mut requests: MessageWriter<StoreRequest>,
) {
    for drag in drags.read() {
        let (OverlayDrag::Start(entity) | OverlayDrag::Move(entity) | OverlayDrag::End(entity)) =
            *drag;
        let Ok((mut overlay, point, polygon)) = overlays.get_mut(entity) else {
            continue;
        };
        let target = &mut *overlay;

        let update = match (drag, point, polygon) {
            (OverlayDrag::Start(_), Some(mut adapter), _) => {
                adapter.on_drag_start(target, &mut cursor);
                None
            }
            (OverlayDrag::Start(_), _, Some(mut adapter)) => {
                adapter.on_drag_start(target, &mut cursor);
                None
            }
            (OverlayDrag::Move(_), Some(mut adapter), _) => {
                adapter.on_drag(target);
                None
            }
            (OverlayDrag::Move(_), _, Some(mut adapter)) => {
                adapter.on_drag(target);
                None
            }
            (OverlayDrag::End(_), Some(mut adapter), _) => adapter
                .on_drag_end(target, &mut cursor)
                .map(|ended| ended.into_draft()),
            (OverlayDrag::End(_), _, Some(mut adapter)) => adapter
                .on_drag_end(target, &mut cursor)
                .map(|ended| ended.into_draft()),
            _ => None,
        };

        if let Some((id, draft)) = update {
            info!("Entity {} moved to {}", id, draft.geometry);
            requests.write(StoreRequest::Update {
                id,
                draft,
                origin: UpdateOrigin::Drag,
            });
        }
    }
}
