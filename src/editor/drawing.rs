//! Systems driving the drawing controller against the map's draw tools.

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::common::MapCursor;
use crate::drawing::{DrawingController, DrawingMode, ShapeDrawn};
use crate::map::{DrawEvent, DrawToolHandle, DrawTools};

#[derive(Resource, Default)]
pub struct DrawingState {
    pub controller: DrawingController<DrawToolHandle>,
}

impl DrawingState {
    pub fn mode(&self) -> DrawingMode {
        self.controller.mode()
    }
}

/// Request to switch drawing mode (`Off` cancels)
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDrawingMode(pub DrawingMode);

fn cursor_for(mode: DrawingMode) -> MapCursor {
    if mode.is_drawing() {
        MapCursor::Crosshair
    } else {
        MapCursor::Default
    }
}

pub fn attach_drawing_controller(mut state: ResMut<DrawingState>, mut tools: ResMut<DrawTools>) {
    state.controller.attach(&mut *tools);
    debug!("Draw control attached");
}

pub fn apply_drawing_requests(
    mut requests: MessageReader<SetDrawingMode>,
    mut state: ResMut<DrawingState>,
    mut tools: ResMut<DrawTools>,
    mut cursor: ResMut<MapCursor>,
) {
    for SetDrawingMode(mode) in requests.read() {
        state.controller.set_mode(&mut *tools, *mode);
        *cursor = cursor_for(*mode);
    }
}

/// Run deferred completions, then deliver this frame's widget events.
pub fn pump_draw_events(
    mut state: ResMut<DrawingState>,
    mut tools: ResMut<DrawTools>,
    mut cursor: ResMut<MapCursor>,
    mut shapes: MessageWriter<ShapeDrawn>,
) {
    state.controller.tick(&mut *tools);

    for event in tools.take_events() {
        match event {
            DrawEvent::VertexAdded(_) => state.controller.on_vertex_added(&*tools),
            DrawEvent::Created(overlay) => {
                if let Some(shape) = state.controller.on_shape_created(&mut *tools, overlay) {
                    info!("Drew {:?}: {}", shape.kind, shape.geometry);
                    shapes.write(shape);
                }
                *cursor = cursor_for(state.mode());
            }
        }
    }
}

pub fn detach_on_exit(
    mut exits: MessageReader<AppExit>,
    mut state: ResMut<DrawingState>,
    mut tools: ResMut<DrawTools>,
) {
    if exits.read().next().is_some() {
        state.controller.detach(&mut *tools);
        debug!("Draw control detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EntityKind;

    #[test]
    fn test_cursor_for_mode() {
        assert_eq!(cursor_for(DrawingMode::Off), MapCursor::Default);
        assert_eq!(
            cursor_for(DrawingMode::Drawing(EntityKind::Polygon)),
            MapCursor::Crosshair
        );
    }

    #[test]
    fn test_drawing_state_starts_off() {
        assert_eq!(DrawingState::default().mode(), DrawingMode::Off);
    }
}
