use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::PICK_RADIUS_PX;
use crate::geometry::EntityKind;
use crate::ui::DialogState;

use super::draw_tool::DrawTools;
use super::params::{is_cursor_over_ui, ui_wants_keyboard, MapView};
use super::projection::{project, unproject};

/// Feed clicks and Enter to the armed draw tool
pub fn handle_draw_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    view: MapView,
    dialog: Res<DialogState>,
    mut contexts: EguiContexts,
    mut draw_tools: ResMut<DrawTools>,
) {
    let Some(tool) = draw_tools.armed() else {
        return;
    };
    if dialog.any_modal_open {
        return;
    }

    if keyboard.just_pressed(KeyCode::Enter) && !ui_wants_keyboard(&mut contexts) {
        draw_tools.complete_armed();
        return;
    }

    if !mouse_button.just_pressed(MouseButton::Left) || is_cursor_over_ui(&mut contexts) {
        return;
    }
    let Some(world) = view.cursor_world_pos() else {
        return;
    };

    // Clicking the first vertex closes a polygon
    let closes_ring = tool.kind == EntityKind::Polygon
        && tool.can_complete()
        && tool
            .vertices
            .first()
            .is_some_and(|first| project(*first).distance(world) <= PICK_RADIUS_PX * view.scale());

    if closes_ring {
        draw_tools.complete_armed();
    } else {
        draw_tools.add_vertex(unproject(world));
    }
}
