//! Run conditions shared by editor systems.

use bevy::prelude::*;

use crate::ui::DialogState;

/// True while no modal is up. Letters typed into the entity form would
/// otherwise re-arm a draw tool behind it.
pub fn no_dialog_open(dialog_state: Res<DialogState>) -> bool {
    !dialog_state.any_modal_open
}
