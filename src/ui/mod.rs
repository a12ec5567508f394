mod entities_panel;
mod entity_dialog;
mod notices;
mod overlay_info;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::{egui, EguiPrimaryContextPass};

use crate::config::ConfigResetNotification;
use crate::editor::EntityDialog;

pub use entity_dialog::DeleteConfirmState;

/// Resource that tracks whether any modal dialog is currently open.
/// Map input handlers should check this to avoid processing input
/// when the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block map input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    entity_dialog: Res<EntityDialog>,
    delete_confirm: Res<DeleteConfirmState>,
    config_reset: Res<ConfigResetNotification>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open =
        entity_dialog.is_open() || delete_confirm.target.is_some() || config_reset.show;
}

/// Let a widget edit a copy of a resource, writing it back only when it differs.
///
/// egui widgets take `&mut T`, and handing them the resource itself would flag it
/// changed every frame.
pub(crate) fn edit_resource<T>(resource: &mut ResMut<T>, edit: impl FnOnce(&mut T))
where
    T: Resource + Clone + PartialEq,
{
    let mut edited = (**resource).clone();
    edit(&mut edited);
    resource.set_if_neq(edited);
}

/// Convert a Bevy color for egui widgets
pub(crate) fn color32(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        (srgba.alpha * 255.0) as u8,
    )
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<DeleteConfirmState>()
            // Side panel renders first so the toolbar fits beside it
            .add_systems(EguiPrimaryContextPass, entities_panel::entities_panel_ui)
            .add_systems(
                EguiPrimaryContextPass,
                toolbar::toolbar_ui.after(entities_panel::entities_panel_ui),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    entity_dialog::entity_dialog_ui,
                    entity_dialog::delete_confirm_ui,
                    notices::config_reset_notification_ui,
                    notices::toasts_ui,
                    overlay_info::overlay_info_ui,
                )
                    .after(toolbar::toolbar_ui),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
