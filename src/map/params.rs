use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use super::camera::{CameraZoom, MapCamera};

/// Bundled camera and window queries for cursor-to-world calculations
#[derive(SystemParam)]
pub struct MapView<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<
        'w,
        's,
        (&'static Camera, &'static GlobalTransform, &'static CameraZoom),
        With<MapCamera>,
    >,
}

impl MapView<'_, '_> {
    pub fn cursor_screen_pos(&self) -> Option<Vec2> {
        self.window.single().ok()?.cursor_position()
    }

    /// Get the world position of the cursor, if available
    pub fn cursor_world_pos(&self) -> Option<Vec2> {
        let cursor_pos = self.cursor_screen_pos()?;
        let (camera, transform, _) = self.camera.single().ok()?;
        camera.viewport_to_world_2d(transform, cursor_pos).ok()
    }

    /// Screen position of a world point, if it is in view
    pub fn world_to_screen(&self, world: Vec2) -> Option<Vec2> {
        let (camera, transform, _) = self.camera.single().ok()?;
        camera.world_to_viewport(transform, world.extend(0.0)).ok()
    }

    /// World units per screen pixel
    pub fn scale(&self) -> f32 {
        self.camera
            .single()
            .map(|(_, _, zoom)| zoom.scale)
            .unwrap_or(1.0)
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}

/// Check if egui is consuming keyboard input
pub fn ui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}
