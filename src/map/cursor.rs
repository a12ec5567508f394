use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::common::MapCursor;

use super::params::is_cursor_over_ui;

/// Apply the requested map cursor to the primary window; egui areas keep the default.
pub fn apply_map_cursor(
    cursor: Res<MapCursor>,
    window_query: Query<Entity, With<PrimaryWindow>>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok(window_entity) = window_query.single() else {
        return;
    };

    let icon = if is_cursor_over_ui(&mut contexts) && *cursor != MapCursor::Move {
        CursorIcon::System(SystemCursorIcon::Default)
    } else {
        cursor.cursor_icon()
    };
    commands.entity(window_entity).insert(icon);
}
