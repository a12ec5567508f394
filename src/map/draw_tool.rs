//! Pluggable drawing tools, one per geometry kind, addressed by handle.
//!
//! Tools collect vertices from map clicks and report a finished [`DrawnOverlay`]
//! through the widget's event queue. Events are only queued for subscribed
//! listeners, mirroring `on`/`off` on a real map widget.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::drawing::{DrawingSurface, DrawnOverlay, SurfaceEvent};
use crate::geometry::{EntityKind, LatLng};

/// Minimum vertices before a tool can finish
pub const MIN_LINE_VERTICES: usize = 2;
pub const MIN_POLYGON_VERTICES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawToolHandle(pub u64);

#[derive(Debug, Clone)]
pub struct DrawTool {
    pub handle: DrawToolHandle,
    pub kind: EntityKind,
    pub vertices: Vec<LatLng>,
}

impl DrawTool {
    pub fn can_complete(&self) -> bool {
        let needed = match self.kind {
            EntityKind::Point => 1,
            EntityKind::Line => MIN_LINE_VERTICES,
            EntityKind::Polygon => MIN_POLYGON_VERTICES,
        };
        self.vertices.len() >= needed
    }

    fn into_overlay(self) -> DrawnOverlay {
        match self.kind {
            EntityKind::Point => match self.vertices.first() {
                Some(position) => DrawnOverlay::Marker(*position),
                None => DrawnOverlay::Other("empty marker".to_string()),
            },
            EntityKind::Line => DrawnOverlay::Polyline(self.vertices),
            EntityKind::Polygon => DrawnOverlay::Polygon(vec![self.vertices]),
        }
    }
}

/// Event emitted by the widget for subscribed listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    VertexAdded(DrawToolHandle),
    Created(DrawnOverlay),
}

#[derive(Resource, Debug, Default)]
pub struct DrawTools {
    control_added: bool,
    next_handle: u64,
    tools: Vec<DrawTool>,
    listeners: HashSet<SurfaceEvent>,
    queue: Vec<DrawEvent>,
}

impl DrawTools {
    pub fn has_control(&self) -> bool {
        self.control_added
    }

    pub fn is_listening(&self, event: SurfaceEvent) -> bool {
        self.listeners.contains(&event)
    }

    /// The tool receiving clicks, if any is armed
    pub fn armed(&self) -> Option<&DrawTool> {
        self.tools.last()
    }

    pub fn armed_count(&self) -> usize {
        self.tools.len()
    }

    fn tool_mut(&mut self, handle: DrawToolHandle) -> Option<&mut DrawTool> {
        self.tools.iter_mut().find(|tool| tool.handle == handle)
    }

    fn emit(&mut self, event: DrawEvent) {
        let listener = match event {
            DrawEvent::VertexAdded(_) => SurfaceEvent::VertexAdded,
            DrawEvent::Created(_) => SurfaceEvent::ShapeCreated,
        };
        if self.listeners.contains(&listener) {
            self.queue.push(event);
        }
    }

    /// Place a vertex on the armed tool. Markers finish immediately.
    pub fn add_vertex(&mut self, position: LatLng) {
        let Some(tool) = self.tools.last_mut() else {
            return;
        };
        tool.vertices.push(position);
        let handle = tool.handle;
        let kind = tool.kind;

        if kind == EntityKind::Point {
            self.finish(handle);
        } else {
            self.emit(DrawEvent::VertexAdded(handle));
        }
    }

    /// Finish the armed tool, as Enter or a click on the first vertex does.
    pub fn complete_armed(&mut self) {
        if let Some(handle) = self.armed().map(|tool| tool.handle) {
            self.finish(handle);
        }
    }

    fn finish(&mut self, handle: DrawToolHandle) {
        let Some(index) = self.tools.iter().position(|tool| tool.handle == handle) else {
            return;
        };
        if !self.tools[index].can_complete() {
            debug!("Draw tool {:?} not ready to complete", handle);
            return;
        }

        let tool = self.tools.remove(index);
        debug!(
            "Draw tool {:?} finished {:?} with {} vertices",
            handle,
            tool.kind,
            tool.vertices.len()
        );
        self.emit(DrawEvent::Created(tool.into_overlay()));
    }

    /// Drain queued events for this frame
    pub fn take_events(&mut self) -> Vec<DrawEvent> {
        std::mem::take(&mut self.queue)
    }
}

impl DrawingSurface for DrawTools {
    type Tool = DrawToolHandle;

    fn add_control(&mut self) {
        self.control_added = true;
    }

    fn remove_control(&mut self) {
        self.control_added = false;
        self.tools.clear();
    }

    fn subscribe(&mut self, event: SurfaceEvent) {
        self.listeners.insert(event);
    }

    fn unsubscribe(&mut self, event: SurfaceEvent) {
        self.listeners.remove(&event);
        self.queue.retain(|queued| match queued {
            DrawEvent::VertexAdded(_) => event != SurfaceEvent::VertexAdded,
            DrawEvent::Created(_) => event != SurfaceEvent::ShapeCreated,
        });
    }

    fn enable_tool(&mut self, kind: EntityKind) -> DrawToolHandle {
        self.next_handle += 1;
        let handle = DrawToolHandle(self.next_handle);
        self.tools.push(DrawTool {
            handle,
            kind,
            vertices: Vec::new(),
        });
        handle
    }

    fn disable_tool(&mut self, tool: DrawToolHandle) {
        self.tools.retain(|t| t.handle != tool);
    }

    fn vertex_count(&self, tool: DrawToolHandle) -> usize {
        self.tools
            .iter()
            .find(|t| t.handle == tool)
            .map_or(0, |t| t.vertices.len())
    }

    fn complete_shape(&mut self, tool: DrawToolHandle) {
        if self.tool_mut(tool).is_some() {
            self.finish(tool);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::{DrawingController, DrawingMode, ShapeDrawn};

    fn listening() -> DrawTools {
        let mut tools = DrawTools::default();
        tools.add_control();
        tools.subscribe(SurfaceEvent::ShapeCreated);
        tools.subscribe(SurfaceEvent::VertexAdded);
        tools
    }

    #[test]
    fn test_marker_finishes_on_first_click() {
        let mut tools = listening();
        tools.enable_tool(EntityKind::Point);

        tools.add_vertex(LatLng::new(41.0, 29.0));

        assert_eq!(
            tools.take_events(),
            vec![DrawEvent::Created(DrawnOverlay::Marker(LatLng::new(41.0, 29.0)))]
        );
        assert!(tools.armed().is_none());
    }

    #[test]
    fn test_polygon_needs_three_vertices() {
        let mut tools = listening();
        let handle = tools.enable_tool(EntityKind::Polygon);
        tools.add_vertex(LatLng::new(0.0, 0.0));
        tools.add_vertex(LatLng::new(0.0, 1.0));

        tools.complete_shape(handle);
        assert!(tools.armed().is_some());

        tools.add_vertex(LatLng::new(1.0, 1.0));
        tools.complete_armed();

        let events = tools.take_events();
        assert!(matches!(events.last(), Some(DrawEvent::Created(DrawnOverlay::Polygon(_)))));
        assert!(tools.armed().is_none());
    }

    #[test]
    fn test_unsubscribed_events_are_dropped() {
        let mut tools = DrawTools::default();
        tools.enable_tool(EntityKind::Point);

        tools.add_vertex(LatLng::new(1.0, 1.0));

        assert!(tools.take_events().is_empty());
    }

    #[test]
    fn test_disable_removes_tool() {
        let mut tools = listening();
        let handle = tools.enable_tool(EntityKind::Line);

        tools.disable_tool(handle);

        assert_eq!(tools.armed_count(), 0);
        assert_eq!(tools.vertex_count(handle), 0);
    }

    #[test]
    fn test_remove_control_disarms_everything() {
        let mut tools = listening();
        tools.enable_tool(EntityKind::Line);
        tools.remove_control();

        assert!(!tools.has_control());
        assert_eq!(tools.armed_count(), 0);
    }

    /// Runs one frame of event delivery the way the editor does.
    fn pump(
        controller: &mut DrawingController<DrawToolHandle>,
        tools: &mut DrawTools,
    ) -> Vec<ShapeDrawn> {
        controller.tick(tools);
        let mut shapes = Vec::new();
        for event in tools.take_events() {
            match event {
                DrawEvent::VertexAdded(_) => controller.on_vertex_added(&*tools),
                DrawEvent::Created(overlay) => {
                    shapes.extend(controller.on_shape_created(tools, overlay));
                }
            }
        }
        shapes
    }

    #[test]
    fn test_controller_line_auto_completes_through_widget() {
        let mut tools = DrawTools::default();
        let mut controller = DrawingController::default();
        controller.attach(&mut tools);
        controller.set_mode(&mut tools, DrawingMode::Drawing(EntityKind::Line));

        tools.add_vertex(LatLng::new(41.0, 29.0));
        assert!(pump(&mut controller, &mut tools).is_empty());

        tools.add_vertex(LatLng::new(40.0, 32.0));
        assert!(pump(&mut controller, &mut tools).is_empty());
        assert!(controller.has_pending_completion());

        let shapes = pump(&mut controller, &mut tools);
        assert_eq!(
            shapes,
            vec![ShapeDrawn {
                kind: EntityKind::Line,
                geometry: "29 41, 32 40".to_string(),
            }]
        );
        assert_eq!(controller.mode(), DrawingMode::Off);
        assert_eq!(tools.armed_count(), 0);
        assert!(!tools.is_listening(SurfaceEvent::VertexAdded));
    }

    #[test]
    fn test_controller_switch_keeps_single_tool() {
        let mut tools = DrawTools::default();
        let mut controller = DrawingController::default();
        controller.attach(&mut tools);

        controller.set_mode(&mut tools, DrawingMode::Drawing(EntityKind::Point));
        controller.set_mode(&mut tools, DrawingMode::Drawing(EntityKind::Polygon));

        assert_eq!(tools.armed_count(), 1);
        assert_eq!(tools.armed().map(|t| t.kind), Some(EntityKind::Polygon));
    }

    #[test]
    fn test_controller_polygon_is_closed() {
        let mut tools = DrawTools::default();
        let mut controller = DrawingController::default();
        controller.attach(&mut tools);
        controller.set_mode(&mut tools, DrawingMode::Drawing(EntityKind::Polygon));

        tools.add_vertex(LatLng::new(0.0, 0.0));
        tools.add_vertex(LatLng::new(0.0, 1.0));
        tools.add_vertex(LatLng::new(1.0, 1.0));
        tools.complete_armed();

        let shapes = pump(&mut controller, &mut tools);
        assert_eq!(shapes[0].geometry, "0 0, 1 0, 1 1, 0 0");
    }
}
