use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::config::AppConfig;
use crate::constants::{BASE_CAMERA_SCALE, MAX_ZOOM, MIN_ZOOM};

use super::projection::project;

#[derive(Component)]
pub struct MapCamera;

/// Orthographic scale of the map camera (world units per screen pixel)
#[derive(Component)]
pub struct CameraZoom {
    pub scale: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self {
            scale: BASE_CAMERA_SCALE,
        }
    }
}

impl CameraZoom {
    /// Scale for a configured zoom level, larger zoom shows less of the map
    pub fn from_map_zoom(map_zoom: f32) -> Self {
        let map_zoom = if map_zoom > 0.0 { map_zoom } else { 1.0 };
        Self {
            scale: (BASE_CAMERA_SCALE / map_zoom).clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }
}

pub fn spawn_camera(mut commands: Commands, config: Res<AppConfig>) {
    let center = project(config.data.map_center());
    let zoom = CameraZoom::from_map_zoom(config.data.map_zoom);
    let scale = zoom.scale;

    commands.spawn((
        Camera2d,
        MapCamera,
        zoom,
        Projection::Orthographic(OrthographicProjection {
            scale,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(center.extend(1000.0)),
    ));
}

pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<MapCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        let delta = event.delta * zoom.scale;
        transform.translation.x -= delta.x;
        transform.translation.y += delta.y;
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraZoom, With<MapCamera>>,
) {
    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let factor = match event.unit {
            MouseScrollUnit::Line => 1.0 - event.y * 0.1,
            MouseScrollUnit::Pixel => 1.0 - event.y * 0.001,
        };

        zoom.scale = (zoom.scale * factor.max(0.1)).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<MapCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_one_is_base_scale() {
        assert_eq!(CameraZoom::from_map_zoom(1.0).scale, BASE_CAMERA_SCALE);
    }

    #[test]
    fn test_higher_zoom_is_smaller_scale() {
        assert!(CameraZoom::from_map_zoom(4.0).scale < CameraZoom::from_map_zoom(1.0).scale);
    }

    #[test]
    fn test_invalid_zoom_falls_back() {
        assert_eq!(CameraZoom::from_map_zoom(0.0).scale, BASE_CAMERA_SCALE);
        assert_eq!(CameraZoom::from_map_zoom(-3.0).scale, BASE_CAMERA_SCALE);
    }
}
