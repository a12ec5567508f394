//! Top-level composition: drawing, dragging and saving on top of the map widget.
//!
//! ## Module Structure
//!
//! - [`drawing`] - [`DrawingState`] and the systems that pump draw-tool events
//! - [`drag_flow`] - overlay drags into store updates
//! - [`save_flow`] - the entity dialog, map clicks and store feedback
//! - [`form`] - [`EntityForm`] validation
//! - [`tools`] - drawing shortcuts
//! - [`notifications`] - toasts

mod conditions;
mod drag_flow;
pub mod drawing;
pub mod form;
pub mod notifications;
pub mod save_flow;
pub mod tools;

pub use conditions::no_dialog_open;
pub use drawing::{DrawingState, SetDrawingMode};
pub use form::EntityForm;
pub use notifications::{Notifications, Toast, ToastLevel};
pub use save_flow::EntityDialog;

use bevy::prelude::*;

use crate::drawing::ShapeDrawn;
use crate::map::MapInput;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawingState>()
            .init_resource::<EntityDialog>()
            .init_resource::<Notifications>()
            .add_message::<SetDrawingMode>()
            .add_message::<ShapeDrawn>()
            .add_systems(Startup, drawing::attach_drawing_controller)
            .add_systems(
                Update,
                (
                    tools::handle_drawing_shortcuts.run_if(no_dialog_open),
                    drawing::apply_drawing_requests,
                    drawing::pump_draw_events,
                    save_flow::open_dialog_for_shape,
                    save_flow::open_dialog_for_click,
                    save_flow::select_clicked_overlay,
                    drag_flow::handle_overlay_drags,
                    save_flow::handle_store_settled,
                    notifications::expire_notifications,
                )
                    .chain()
                    .after(MapInput),
            )
            .add_systems(Last, drawing::detach_on_exit);
    }
}
