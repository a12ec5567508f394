//! In-process map widget.
//!
//! ## Module Structure
//!
//! - [`projection`] - Web Mercator between `LatLng` and world units
//! - [`camera`] - pan and zoom
//! - [`overlay`] - [`MapOverlay`] components rebuilt from the entity collection
//! - [`draw_tool`] - pluggable per-kind draw tools ([`DrawTools`])
//! - [`pointer`] - click, pick and drag lifecycle messages
//! - [`rendering`] - gizmo drawing
//!
//! The widget knows nothing about drawing modes or saving. It arms tools when told
//! to, reports finished shapes to subscribed listeners, and reports drags.

mod camera;
mod cursor;
mod draw_input;
pub mod draw_tool;
mod hit_testing;
pub mod overlay;
mod params;
mod pointer;
pub mod projection;
mod rendering;

pub use camera::{CameraZoom, MapCamera};
pub use draw_tool::{DrawEvent, DrawToolHandle, DrawTools};
pub use overlay::{MapOverlay, OverlayShape};
pub use params::{is_cursor_over_ui, ui_wants_keyboard, MapView};
pub use pointer::{MapClicked, OverlayClicked, OverlayDrag, PointerState};
pub use rendering::{kind_color, MapSelection};

use bevy::prelude::*;

use crate::common::MapCursor;
use crate::config::ConfigLoaded;
use crate::store::StoreSync;

/// Widget input systems; consumers of its messages run after this set
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapInput;

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawTools>()
            .init_resource::<PointerState>()
            .init_resource::<MapSelection>()
            .init_resource::<MapCursor>()
            .init_resource::<overlay::OverlaysDirty>()
            .init_gizmo_group::<rendering::OverlayGizmoGroup>()
            .add_message::<MapClicked>()
            .add_message::<OverlayClicked>()
            .add_message::<OverlayDrag>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera.after(ConfigLoaded),
                    rendering::configure_overlay_gizmos,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                ),
            )
            .add_systems(
                Update,
                (
                    overlay::mark_overlays_dirty,
                    overlay::sync_overlays,
                    draw_input::handle_draw_input,
                    pointer::handle_pointer,
                )
                    .chain()
                    .after(StoreSync)
                    .in_set(MapInput),
            )
            .add_systems(
                Update,
                (
                    rendering::render_overlays,
                    rendering::render_draw_preview,
                    cursor::apply_map_cursor,
                )
                    .after(MapInput),
            );
    }
}
