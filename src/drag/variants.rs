use std::fmt::Debug;

use crate::constants::DRAG_COORDINATE_DECIMALS;
use crate::geometry::{encode, encode_ring, LatLng};

use super::OverlayStyle;

/// Per-overlay-type behavior of a drag adapter.
pub trait DragVariant: Send + Sync + 'static {
    /// What the widget reports at drag end
    type Position: Clone + Debug + PartialEq + Send + Sync + 'static;

    /// Style applied on drag start
    fn start_style(baseline: &OverlayStyle) -> OverlayStyle;

    /// Style applied on every drag step
    fn drag_style(current: &OverlayStyle, baseline: &OverlayStyle) -> OverlayStyle;

    /// Canonical geometry text for a dropped position
    fn to_geometry(position: &Self::Position) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDrag;

impl DragVariant for PointDrag {
    type Position = LatLng;

    fn start_style(baseline: &OverlayStyle) -> OverlayStyle {
        baseline.with_opacity(0.6)
    }

    fn drag_style(current: &OverlayStyle, _baseline: &OverlayStyle) -> OverlayStyle {
        current.with_opacity(0.7)
    }

    fn to_geometry(position: &LatLng) -> String {
        encode(&[position.rounded(DRAG_COORDINATE_DECIMALS)])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonDrag;

impl DragVariant for PolygonDrag {
    type Position = Vec<LatLng>;

    fn start_style(baseline: &OverlayStyle) -> OverlayStyle {
        OverlayStyle {
            opacity: 0.5,
            fill_opacity: 0.3,
            dashed: true,
            ..*baseline
        }
    }

    fn drag_style(current: &OverlayStyle, baseline: &OverlayStyle) -> OverlayStyle {
        OverlayStyle {
            weight: baseline.weight + 2.0,
            ..*current
        }
    }

    fn to_geometry(ring: &Vec<LatLng>) -> String {
        let ring: Vec<LatLng> = ring
            .iter()
            .map(|p| p.rounded(DRAG_COORDINATE_DECIMALS))
            .collect();
        encode_ring(&ring)
    }
}
