use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::drawing::DrawingMode;
use crate::geometry::EntityKind;
use crate::map::ui_wants_keyboard;

use super::drawing::{DrawingState, SetDrawingMode};

/// Keyboard shortcut for each drawing kind
pub fn shortcut_key(kind: EntityKind) -> KeyCode {
    match kind {
        EntityKind::Point => KeyCode::KeyP,
        EntityKind::Line => KeyCode::KeyL,
        EntityKind::Polygon => KeyCode::KeyA,
    }
}

/// Toolbar label with its shortcut
pub fn tool_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Point => "Point (P)",
        EntityKind::Line => "Line (L)",
        EntityKind::Polygon => "Polygon (A)",
    }
}

/// Mode requested by the keys pressed this frame, if any
pub fn mode_from_keys(
    just_pressed: impl Fn(KeyCode) -> bool,
    current: DrawingMode,
) -> Option<DrawingMode> {
    if just_pressed(KeyCode::Escape) {
        return current.is_drawing().then_some(DrawingMode::Off);
    }
    EntityKind::all()
        .iter()
        .find(|kind| just_pressed(shortcut_key(**kind)))
        .map(|kind| DrawingMode::Drawing(*kind))
}

pub fn handle_drawing_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<DrawingState>,
    mut contexts: EguiContexts,
    mut requests: MessageWriter<SetDrawingMode>,
) {
    // Don't change modes if typing in a text field
    if ui_wants_keyboard(&mut contexts) {
        return;
    }

    if let Some(mode) = mode_from_keys(|key| keyboard.just_pressed(key), state.mode()) {
        requests.write(SetDrawingMode(mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_contain_shortcuts() {
        for kind in EntityKind::all() {
            let label = tool_label(*kind);
            assert!(label.contains('('), "Label should contain shortcut: {}", label);
        }
    }

    #[test]
    fn test_keys_select_modes() {
        assert_eq!(
            mode_from_keys(|k: KeyCode| k == KeyCode::KeyA, DrawingMode::Off),
            Some(DrawingMode::Drawing(EntityKind::Polygon))
        );
        assert_eq!(
            mode_from_keys(|k: KeyCode| k == KeyCode::KeyL, DrawingMode::Drawing(EntityKind::Point)),
            Some(DrawingMode::Drawing(EntityKind::Line))
        );
        assert_eq!(mode_from_keys(|_: KeyCode| false, DrawingMode::Off), None);
    }

    #[test]
    fn test_escape_only_cancels_when_drawing() {
        let escape = |k: KeyCode| k == KeyCode::Escape;

        assert_eq!(
            mode_from_keys(escape, DrawingMode::Drawing(EntityKind::Line)),
            Some(DrawingMode::Off)
        );
        assert_eq!(mode_from_keys(escape, DrawingMode::Off), None);
    }
}
