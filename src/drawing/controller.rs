//! The drawing controller state machine.
//!
//! ```text
//!           select(kind)              completion / cancel / select(other)
//!   Off ───────────────────▶ Drawing(kind) ─────────────────────────────▶ Off
//! ```
//!
//! Entering `Drawing(kind)` always disarms the previous tool first, clears the
//! scratch group, then arms exactly one tool. Lines finish themselves once two
//! vertices are placed; the forced completion is deferred to the next [`tick`]
//! because the widget's tool must not be completed from inside its own
//! vertex-added callback.
//!
//! [`tick`]: DrawingController::tick

use std::fmt::Debug;

use bevy::log::debug;
use bevy::prelude::Message;

use crate::geometry::{encode, encode_ring, EntityKind};

use super::{DrawingMode, DrawnOverlay};

/// Vertex count at which a line tool is force-completed.
pub const LINE_AUTO_COMPLETE_VERTICES: usize = 2;

/// Widget events the controller subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceEvent {
    ShapeCreated,
    VertexAdded,
}

/// The map widget as seen by the drawing controller.
pub trait DrawingSurface {
    /// Handle to one armed drawing tool
    type Tool: Copy + PartialEq + Debug;

    fn add_control(&mut self);
    fn remove_control(&mut self);
    fn subscribe(&mut self, event: SurfaceEvent);
    fn unsubscribe(&mut self, event: SurfaceEvent);

    /// Create and enable a tool restricted to `kind`
    fn enable_tool(&mut self, kind: EntityKind) -> Self::Tool;
    fn disable_tool(&mut self, tool: Self::Tool);
    fn vertex_count(&self, tool: Self::Tool) -> usize;
    /// Finish the tool's shape; the widget reports it through its completion event
    fn complete_shape(&mut self, tool: Self::Tool);
}

/// A finished drawing, ready for the entity form.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct ShapeDrawn {
    pub kind: EntityKind,
    pub geometry: String,
}

/// Extract `(kind, geometry)` from a completed widget overlay.
///
/// Returns `None` for overlay types the store cannot hold and for empty or
/// non-finite output.
pub fn shape_from_overlay(overlay: &DrawnOverlay) -> Option<ShapeDrawn> {
    let (kind, geometry) = match overlay {
        DrawnOverlay::Marker(position) => {
            if !position.is_finite() {
                return None;
            }
            (EntityKind::Point, encode(&[*position]))
        }
        DrawnOverlay::Polyline(points) => {
            if points.is_empty() || !points.iter().all(|p| p.is_finite()) {
                return None;
            }
            (EntityKind::Line, encode(points))
        }
        DrawnOverlay::Polygon(rings) => {
            let ring = rings.first()?;
            if ring.is_empty() || !ring.iter().all(|p| p.is_finite()) {
                return None;
            }
            (EntityKind::Polygon, encode_ring(ring))
        }
        DrawnOverlay::Other(_) => return None,
    };

    Some(ShapeDrawn { kind, geometry })
}

#[derive(Debug)]
pub struct DrawingController<T> {
    mode: DrawingMode,
    tool: Option<T>,
    scratch: Vec<DrawnOverlay>,
    attached: bool,
    vertex_listener: bool,
    pending_completion: bool,
}

impl<T> Default for DrawingController<T> {
    fn default() -> Self {
        Self {
            mode: DrawingMode::Off,
            tool: None,
            scratch: Vec::new(),
            attached: false,
            vertex_listener: false,
            pending_completion: false,
        }
    }
}

impl<T: Copy + PartialEq + Debug> DrawingController<T> {
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn active_tool(&self) -> Option<T> {
        self.tool
    }

    /// Overlays held in the scratch group (in-progress bookkeeping only)
    pub fn scratch(&self) -> &[DrawnOverlay] {
        &self.scratch
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn has_pending_completion(&self) -> bool {
        self.pending_completion
    }

    /// Add the draw control to the widget and start listening for completed shapes.
    pub fn attach<S: DrawingSurface<Tool = T>>(&mut self, surface: &mut S) {
        if self.attached {
            return;
        }
        surface.add_control();
        surface.subscribe(SurfaceEvent::ShapeCreated);
        self.attached = true;
    }

    /// Tear everything down: tool, listeners and control.
    pub fn detach<S: DrawingSurface<Tool = T>>(&mut self, surface: &mut S) {
        self.release_tool(surface);
        self.scratch.clear();
        self.mode = DrawingMode::Off;

        if self.attached {
            surface.remove_control();
            surface.unsubscribe(SurfaceEvent::ShapeCreated);
            self.attached = false;
        }
    }

    /// Switch drawing mode. Selecting a kind while another is active cancels it.
    pub fn set_mode<S: DrawingSurface<Tool = T>>(&mut self, surface: &mut S, mode: DrawingMode) {
        self.release_tool(surface);
        self.scratch.clear();
        self.mode = mode;

        let Some(kind) = mode.kind() else {
            debug!("Drawing mode off");
            return;
        };

        let tool = surface.enable_tool(kind);
        self.tool = Some(tool);

        if kind == EntityKind::Line {
            surface.subscribe(SurfaceEvent::VertexAdded);
            self.vertex_listener = true;
        }

        debug!("Drawing mode {:?} armed with tool {:?}", kind, tool);
    }

    pub fn cancel<S: DrawingSurface<Tool = T>>(&mut self, surface: &mut S) {
        self.set_mode(surface, DrawingMode::Off);
    }

    /// React to the widget's vertex-added event.
    pub fn on_vertex_added<S: DrawingSurface<Tool = T>>(&mut self, surface: &S) {
        if self.mode != DrawingMode::Drawing(EntityKind::Line) || !self.vertex_listener {
            return;
        }
        let Some(tool) = self.tool else {
            return;
        };

        if surface.vertex_count(tool) == LINE_AUTO_COMPLETE_VERTICES {
            self.pending_completion = true;
        }
    }

    /// Run deferred work scheduled by the previous event round.
    pub fn tick<S: DrawingSurface<Tool = T>>(&mut self, surface: &mut S) {
        if !self.pending_completion {
            return;
        }
        self.pending_completion = false;

        if let Some(tool) = self.tool {
            debug!("Auto-completing line tool {:?}", tool);
            surface.complete_shape(tool);
        }
    }

    /// React to the widget's completion event.
    ///
    /// Drawing is single-shot: the controller always returns to `Off`.
    pub fn on_shape_created<S: DrawingSurface<Tool = T>>(
        &mut self,
        surface: &mut S,
        overlay: DrawnOverlay,
    ) -> Option<ShapeDrawn> {
        let shape = shape_from_overlay(&overlay);
        if shape.is_none() {
            debug!("Ignoring drawn overlay of type {}", overlay.native_type());
        }

        self.scratch.push(overlay);
        self.set_mode(surface, DrawingMode::Off);
        shape
    }

    fn release_tool<S: DrawingSurface<Tool = T>>(&mut self, surface: &mut S) {
        if self.vertex_listener {
            surface.unsubscribe(SurfaceEvent::VertexAdded);
            self.vertex_listener = false;
        }
        if let Some(tool) = self.tool.take() {
            surface.disable_tool(tool);
        }
        self.pending_completion = false;
    }
}
