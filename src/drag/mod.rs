//! Drag-to-reshape adapters for existing entity overlays.
//!
//! One [`DragAdapter`] wraps one overlay bound to one entity and turns the widget's
//! `dragstart` / `drag` / `dragend` lifecycle into a [`DragEnded`] value. The adapter
//! never talks to the remote store; the editor's drag flow encodes the result and
//! issues the update.
//!
//! Two variants share the contract:
//! - [`PointDrag`] - single-point markers
//! - [`PolygonDrag`] - closed-ring polygons

mod adapter;
mod style;
#[cfg(test)]
mod tests;
mod variants;

pub use adapter::{DragAdapter, DragEnded, DragTarget};
pub use style::OverlayStyle;
pub use variants::{DragVariant, PointDrag, PolygonDrag};

/// Marker overlay adapter
pub type PointDragAdapter = DragAdapter<PointDrag>;
/// Polygon overlay adapter
pub type PolygonDragAdapter = DragAdapter<PolygonDrag>;
