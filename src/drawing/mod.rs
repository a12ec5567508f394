//! Drawing state machine: turns map-widget draw events into `(kind, geometry)` pairs.
//!
//! ## Module Structure
//!
//! - [`mode`] - [`DrawingMode`] (off or drawing one kind)
//! - [`overlay`] - [`DrawnOverlay`], the widget's finished shape
//! - [`controller`] - [`DrawingController`] and the [`DrawingSurface`] seam
//!
//! The controller owns the single "current tool" slot and the scratch overlay group.
//! Nothing else arms or disarms widget tools.

mod controller;
mod mode;
mod overlay;

pub use controller::{
    shape_from_overlay, DrawingController, DrawingSurface, ShapeDrawn, SurfaceEvent,
    LINE_AUTO_COMPLETE_VERTICES,
};
pub use mode::DrawingMode;
pub use overlay::DrawnOverlay;
