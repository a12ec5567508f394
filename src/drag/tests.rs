use super::*;
use crate::common::MapCursor;
use crate::geometry::{EntityKind, LatLng};
use crate::store::GeoEntity;

struct FakeMarker {
    position: Option<LatLng>,
    style: OverlayStyle,
    draggable: bool,
}

impl FakeMarker {
    fn at(lat: f64, lng: f64) -> Self {
        Self {
            position: Some(LatLng::new(lat, lng)),
            style: OverlayStyle::default(),
            draggable: false,
        }
    }
}

impl DragTarget<LatLng> for FakeMarker {
    fn drag_position(&self) -> Option<LatLng> {
        self.position
    }

    fn style(&self) -> OverlayStyle {
        self.style
    }

    fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
    }

    fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }
}

struct FakePolygon {
    ring: Vec<LatLng>,
    style: OverlayStyle,
    draggable: bool,
}

impl DragTarget<Vec<LatLng>> for FakePolygon {
    fn drag_position(&self) -> Option<Vec<LatLng>> {
        (!self.ring.is_empty()).then(|| self.ring.clone())
    }

    fn style(&self) -> OverlayStyle {
        self.style
    }

    fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
    }

    fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }
}

fn point_entity() -> GeoEntity {
    GeoEntity {
        id: 7,
        name: "Depot".to_string(),
        geometry: "28 40".to_string(),
        kind: EntityKind::Point,
    }
}

fn polygon_entity() -> GeoEntity {
    GeoEntity {
        id: 9,
        name: "Field".to_string(),
        geometry: "0 0, 1 0, 1 1, 0 0".to_string(),
        kind: EntityKind::Polygon,
    }
}

#[test]
fn test_attach_enables_dragging() {
    let mut marker = FakeMarker::at(40.0, 28.0);
    let mut adapter = PointDragAdapter::new(point_entity());

    adapter.attach(&mut marker);

    assert!(marker.draggable);
    assert!(adapter.is_attached());
}

#[test]
fn test_point_drag_lifecycle_styles() {
    let mut marker = FakeMarker::at(40.0, 28.0);
    let mut cursor = MapCursor::Default;
    let mut adapter = PointDragAdapter::new(point_entity());
    adapter.attach(&mut marker);

    adapter.on_drag_start(&mut marker, &mut cursor);
    assert_eq!(marker.style.opacity, 0.6);
    assert_eq!(cursor, MapCursor::Move);

    adapter.on_drag(&mut marker);
    assert_eq!(marker.style.opacity, 0.7);

    marker.position = Some(LatLng::new(41.0, 29.0));
    let ended = adapter.on_drag_end(&mut marker, &mut cursor);

    assert_eq!(marker.style, OverlayStyle::default());
    assert_eq!(cursor, MapCursor::Default);
    assert!(ended.is_some());
}

#[test]
fn test_point_drag_end_reports_encoded_geometry() {
    let mut marker = FakeMarker::at(40.0, 28.0);
    let mut cursor = MapCursor::Default;
    let mut adapter = PointDragAdapter::new(point_entity());
    adapter.attach(&mut marker);
    adapter.on_drag_start(&mut marker, &mut cursor);

    marker.position = Some(LatLng::new(41.0, 29.0));
    let ended = adapter.on_drag_end(&mut marker, &mut cursor).unwrap();

    assert_eq!(ended.entity.id, 7);
    assert_eq!(ended.geometry(), "29 41");

    let (id, draft) = ended.into_draft();
    assert_eq!(id, 7);
    assert_eq!(draft.name, "Depot");
    assert_eq!(draft.kind, EntityKind::Point);
    assert_eq!(draft.geometry, "29 41");
}

#[test]
fn test_drag_end_rounds_away_projection_noise() {
    let mut marker = FakeMarker::at(40.0, 28.0);
    let mut cursor = MapCursor::Default;
    let mut adapter = PointDragAdapter::new(point_entity());
    adapter.attach(&mut marker);
    adapter.on_drag_start(&mut marker, &mut cursor);

    marker.position = Some(LatLng::new(40.999_999_8, 29.000_001_907_348_633));
    let ended = adapter.on_drag_end(&mut marker, &mut cursor).unwrap();

    assert_eq!(ended.geometry(), "29.000002 41");
}

#[test]
fn test_polygon_drag_rounding_keeps_ring_closed() {
    let noisy = LatLng::new(0.000_000_1, 0.000_000_2);
    let mut polygon = FakePolygon {
        ring: vec![noisy, LatLng::new(0.0, 1.0), LatLng::new(1.0, 1.0), noisy],
        style: OverlayStyle::default(),
        draggable: false,
    };
    let mut cursor = MapCursor::Default;
    let mut adapter = PolygonDragAdapter::new(polygon_entity());
    adapter.attach(&mut polygon);
    adapter.on_drag_start(&mut polygon, &mut cursor);

    let ended = adapter.on_drag_end(&mut polygon, &mut cursor).unwrap();

    assert_eq!(ended.geometry(), "0 0, 1 0, 1 1, 0 0");
}

#[test]
fn test_polygon_drag_lifecycle_styles() {
    let baseline = OverlayStyle {
        opacity: 1.0,
        fill_opacity: 0.2,
        weight: 3.0,
        dashed: false,
    };
    let mut polygon = FakePolygon {
        ring: vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0), LatLng::new(1.0, 1.0)],
        style: baseline,
        draggable: false,
    };
    let mut cursor = MapCursor::Default;
    let mut adapter = PolygonDragAdapter::new(polygon_entity());
    adapter.attach(&mut polygon);

    adapter.on_drag_start(&mut polygon, &mut cursor);
    assert_eq!(polygon.style.opacity, 0.5);
    assert_eq!(polygon.style.fill_opacity, 0.3);
    assert!(polygon.style.dashed);

    adapter.on_drag(&mut polygon);
    adapter.on_drag(&mut polygon);
    assert_eq!(polygon.style.weight, 5.0);
    assert!(polygon.style.dashed);

    adapter.on_drag_end(&mut polygon, &mut cursor);
    assert_eq!(polygon.style, baseline);
}

#[test]
fn test_polygon_drag_end_closes_ring() {
    let mut polygon = FakePolygon {
        ring: vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0), LatLng::new(1.0, 1.0)],
        style: OverlayStyle::default(),
        draggable: false,
    };
    let mut cursor = MapCursor::Default;
    let mut adapter = PolygonDragAdapter::new(polygon_entity());
    adapter.attach(&mut polygon);
    adapter.on_drag_start(&mut polygon, &mut cursor);

    let ended = adapter.on_drag_end(&mut polygon, &mut cursor).unwrap();

    assert_eq!(ended.geometry(), "0 0, 1 0, 1 1, 0 0");
}

#[test]
fn test_detached_adapter_ignores_events() {
    let mut marker = FakeMarker::at(40.0, 28.0);
    let mut cursor = MapCursor::Default;
    let mut adapter = PointDragAdapter::new(point_entity());

    adapter.on_drag_start(&mut marker, &mut cursor);
    adapter.on_drag(&mut marker);

    assert_eq!(marker.style, OverlayStyle::default());
    assert_eq!(cursor, MapCursor::Default);
    assert!(adapter.on_drag_end(&mut marker, &mut cursor).is_none());
}

#[test]
fn test_detach_disables_dragging_and_restores_style() {
    let mut marker = FakeMarker::at(40.0, 28.0);
    let mut cursor = MapCursor::Default;
    let mut adapter = PointDragAdapter::new(point_entity());
    adapter.attach(&mut marker);
    adapter.on_drag_start(&mut marker, &mut cursor);

    adapter.detach(&mut marker);

    assert!(!marker.draggable);
    assert!(!adapter.is_attached());
    assert_eq!(marker.style, OverlayStyle::default());
    assert!(adapter.on_drag_end(&mut marker, &mut cursor).is_none());
}

#[test]
fn test_drag_end_without_position_restores_style() {
    let mut marker = FakeMarker::at(40.0, 28.0);
    let mut cursor = MapCursor::Default;
    let mut adapter = PointDragAdapter::new(point_entity());
    adapter.attach(&mut marker);
    adapter.on_drag_start(&mut marker, &mut cursor);

    marker.position = None;
    let ended = adapter.on_drag_end(&mut marker, &mut cursor);

    assert!(ended.is_none());
    assert_eq!(marker.style, OverlayStyle::default());
    assert_eq!(cursor, MapCursor::Default);
}
