use crate::geometry::LatLng;

/// A finished shape as emitted by the map widget's completion event.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawnOverlay {
    Marker(LatLng),
    Polyline(Vec<LatLng>),
    /// Rings as reported by the widget; only the outer ring is used.
    Polygon(Vec<Vec<LatLng>>),
    /// Any other native overlay (rectangle, circle, ...)
    Other(String),
}

impl DrawnOverlay {
    /// The widget's name for this overlay type
    pub fn native_type(&self) -> &str {
        match self {
            DrawnOverlay::Marker(_) => "marker",
            DrawnOverlay::Polyline(_) => "polyline",
            DrawnOverlay::Polygon(_) => "polygon",
            DrawnOverlay::Other(name) => name,
        }
    }

    /// All vertices, used to render the scratch group
    pub fn vertices(&self) -> Vec<LatLng> {
        match self {
            DrawnOverlay::Marker(p) => vec![*p],
            DrawnOverlay::Polyline(points) => points.clone(),
            DrawnOverlay::Polygon(rings) => rings.first().cloned().unwrap_or_default(),
            DrawnOverlay::Other(_) => Vec::new(),
        }
    }
}
