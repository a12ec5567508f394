//! Pointer lifecycle on the map: clicks, overlay picks and overlay drags.
//!
//! A press on a draggable overlay becomes a drag once the pointer has travelled
//! `DRAG_THRESHOLD_PX`. The widget moves the overlay itself and reports
//! `Start` / `Move` / `End`; what the drag means is decided elsewhere.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::DRAG_THRESHOLD_PX;
use crate::geometry::LatLng;
use crate::ui::DialogState;

use super::draw_tool::DrawTools;
use super::hit_testing::pick_overlay;
use super::overlay::MapOverlay;
use super::params::{is_cursor_over_ui, MapView};
use super::projection::unproject;

/// Click on empty map, with the clicked position
#[derive(Message, Debug, Clone, Copy)]
pub struct MapClicked(pub LatLng);

/// Press and release on an overlay without moving it
#[derive(Message, Debug, Clone, Copy)]
pub struct OverlayClicked {
    pub entity_id: i64,
}

/// Drag lifecycle of one overlay entity
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayDrag {
    Start(Entity),
    Move(Entity),
    End(Entity),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    screen: Vec2,
    last_world: Vec2,
    overlay: Option<Entity>,
}

#[derive(Resource, Debug, Default)]
pub struct PointerState {
    press: Option<Press>,
    dragging: Option<Entity>,
}

impl PointerState {
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn dragged(&self) -> Option<Entity> {
        self.dragging
    }
}

/// Whether travel from `start` to `current` (screen pixels) starts a drag
pub fn exceeds_drag_threshold(start: Vec2, current: Vec2) -> bool {
    start.distance(current) > DRAG_THRESHOLD_PX
}

#[allow(clippy::too_many_arguments)]
pub fn handle_pointer(
    mouse_button: Res<ButtonInput<MouseButton>>,
    view: MapView,
    draw_tools: Res<DrawTools>,
    dialog: Res<DialogState>,
    mut contexts: EguiContexts,
    mut state: ResMut<PointerState>,
    mut overlays: Query<(Entity, &mut MapOverlay)>,
    mut drag_events: MessageWriter<OverlayDrag>,
    mut overlay_clicks: MessageWriter<OverlayClicked>,
    mut map_clicks: MessageWriter<MapClicked>,
) {
    // No overlay interaction while a draw tool is armed
    if draw_tools.armed().is_some() {
        if let Some(entity) = state.dragging.take() {
            drag_events.write(OverlayDrag::End(entity));
        }
        state.press = None;
        return;
    }

    let (Some(screen), Some(world)) = (view.cursor_screen_pos(), view.cursor_world_pos()) else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left)
        && !dialog.any_modal_open
        && !is_cursor_over_ui(&mut contexts)
    {
        let scale = view.scale();
        let picked = pick_overlay(overlays.iter(), world, scale);
        state.press = Some(Press {
            screen,
            last_world: world,
            overlay: picked,
        });
        return;
    }

    let Some(mut press) = state.press else {
        return;
    };

    if mouse_button.just_released(MouseButton::Left) {
        state.press = None;

        if let Some(entity) = state.dragging.take() {
            drag_events.write(OverlayDrag::End(entity));
            return;
        }

        match press.overlay.and_then(|entity| overlays.get(entity).ok()) {
            Some((_, overlay)) => {
                overlay_clicks.write(OverlayClicked {
                    entity_id: overlay.entity_id,
                });
            }
            None => {
                map_clicks.write(MapClicked(unproject(world)));
            }
        }
        return;
    }

    if !mouse_button.pressed(MouseButton::Left) {
        // Release happened outside the window
        if let Some(entity) = state.dragging.take() {
            drag_events.write(OverlayDrag::End(entity));
        }
        state.press = None;
        return;
    }

    let Some(entity) = press.overlay else {
        return;
    };
    let Ok((_, mut overlay)) = overlays.get_mut(entity) else {
        state.press = None;
        state.dragging = None;
        return;
    };

    if state.dragging.is_none() {
        if !overlay.draggable || !exceeds_drag_threshold(press.screen, screen) {
            return;
        }
        state.dragging = Some(entity);
        drag_events.write(OverlayDrag::Start(entity));
    }

    let delta = world - press.last_world;
    if delta != Vec2::ZERO {
        overlay.shape.translate(delta);
        press.last_world = world;
        state.press = Some(press);
        drag_events.write(OverlayDrag::Move(entity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_threshold() {
        let start = Vec2::new(100.0, 100.0);

        assert!(!exceeds_drag_threshold(start, start));
        assert!(!exceeds_drag_threshold(start, Vec2::new(103.0, 100.0)));
        assert!(exceeds_drag_threshold(start, Vec2::new(105.0, 100.0)));
    }

    #[test]
    fn test_pointer_state_default_idle() {
        let state = PointerState::default();
        assert!(!state.is_dragging());
        assert!(state.dragged().is_none());
    }
}
