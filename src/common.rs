//! Common types shared across multiple modules.
//!
//! [`MapCursor`] is written by both the drawing systems and the drag adapters and
//! applied to the primary window once per frame.

use bevy::prelude::*;
use bevy::window::{CursorIcon, SystemCursorIcon};

/// Cursor affordance requested for the map area.
#[derive(Resource, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MapCursor {
    #[default]
    Default,
    /// A drawing tool is armed
    Crosshair,
    /// An overlay is being dragged
    Move,
}

impl MapCursor {
    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            MapCursor::Default => CursorIcon::System(SystemCursorIcon::Default),
            MapCursor::Crosshair => CursorIcon::System(SystemCursorIcon::Crosshair),
            MapCursor::Move => CursorIcon::System(SystemCursorIcon::Move),
        }
    }
}
