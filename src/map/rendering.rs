//! Gizmo rendering of overlays and the armed draw tool.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

use crate::drag::OverlayStyle;
use crate::geometry::EntityKind;
use crate::store::PendingDrags;

use super::draw_tool::DrawTools;
use super::overlay::{MapOverlay, OverlayShape};
use super::params::MapView;
use super::projection::project;

const MARKER_RADIUS_PX: f32 = 6.0;
const DASH_PX: f32 = 8.0;
const GAP_PX: f32 = 6.0;
const HATCH_SPACING_PX: f32 = 6.0;
/// Alpha multiplier for entities with an update in flight
const PENDING_DIM: f32 = 0.4;

#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct OverlayGizmoGroup;

pub fn configure_overlay_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<OverlayGizmoGroup>();
    config.line.width = 2.0;
}

/// Entity highlighted on the map
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MapSelection(pub Option<i64>);

pub fn kind_color(kind: EntityKind) -> Color {
    match kind {
        EntityKind::Point => Color::srgb(0.86, 0.15, 0.15),
        EntityKind::Line => Color::srgb(0.15, 0.39, 0.92),
        EntityKind::Polygon => Color::srgb(0.09, 0.64, 0.29),
    }
}

/// Split a segment into dash pieces of the given world lengths
pub fn dash_segments(a: Vec2, b: Vec2, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    let length = a.distance(b);
    if length <= f32::EPSILON || dash <= 0.0 {
        return vec![(a, b)];
    }
    let dir = (b - a) / length;
    let mut pieces = Vec::new();
    let mut t = 0.0;
    while t < length {
        let end = (t + dash).min(length);
        pieces.push((a + dir * t, a + dir * end));
        t = end + gap;
    }
    pieces
}

/// Horizontal fill lines inside a ring, `spacing` apart
pub fn hatch_lines(ring: &[Vec2], spacing: f32) -> Vec<(Vec2, Vec2)> {
    if ring.len() < 3 || spacing <= 0.0 {
        return Vec::new();
    }
    let (min_y, max_y) = ring
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

    let mut lines = Vec::new();
    let mut y = min_y + spacing / 2.0;
    while y < max_y {
        let mut crossings: Vec<f32> = Vec::new();
        let mut j = ring.len() - 1;
        for i in 0..ring.len() {
            let (a, b) = (ring[i], ring[j]);
            if (a.y > y) != (b.y > y) {
                crossings.push(a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x));
            }
            j = i;
        }
        crossings.sort_by(f32::total_cmp);
        for pair in crossings.chunks_exact(2) {
            lines.push((Vec2::new(pair[0], y), Vec2::new(pair[1], y)));
        }
        y += spacing;
    }
    lines
}

struct Pen<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's, OverlayGizmoGroup>,
    scale: f32,
}

impl Pen<'_, '_, '_> {
    fn stroke(&mut self, a: Vec2, b: Vec2, color: Color, style: &OverlayStyle) {
        let pieces = if style.dashed {
            dash_segments(a, b, DASH_PX * self.scale, GAP_PX * self.scale)
        } else {
            vec![(a, b)]
        };

        // Extra weight is drawn as parallel copies one pixel apart
        let copies = ((style.weight - 2.0) / 2.0).round().max(0.0) as i32;
        let normal = (b - a).perp().normalize_or_zero() * self.scale;

        for (start, end) in pieces {
            for k in -copies..=copies {
                let shift = normal * k as f32;
                self.gizmos.line_2d(start + shift, end + shift, color);
            }
        }
    }

    fn path(&mut self, points: &[Vec2], color: Color, style: &OverlayStyle) {
        for w in points.windows(2) {
            self.stroke(w[0], w[1], color, style);
        }
    }

    fn marker(&mut self, at: Vec2, color: Color, selected: bool) {
        let radius = MARKER_RADIUS_PX * self.scale;
        let mut r = radius;
        while r > 0.0 {
            self.gizmos.circle_2d(at, r, color);
            r -= self.scale * 1.5;
        }
        if selected {
            self.gizmos
                .circle_2d(at, radius + 3.0 * self.scale, Color::WHITE);
        }
    }
}

pub fn render_overlays(
    mut gizmos: Gizmos<OverlayGizmoGroup>,
    view: MapView,
    overlays: Query<&MapOverlay>,
    selection: Res<MapSelection>,
    pending: Res<PendingDrags>,
) {
    let mut pen = Pen {
        gizmos: &mut gizmos,
        scale: view.scale(),
    };

    for overlay in overlays.iter() {
        let selected = selection.0 == Some(overlay.entity_id);
        let mut style = overlay.style;
        if pending.contains(overlay.entity_id) {
            style.opacity *= PENDING_DIM;
            style.fill_opacity *= PENDING_DIM;
        }
        if selected {
            style.weight += 2.0;
        }
        let base = kind_color(overlay.kind);
        let color = base.with_alpha(style.opacity);

        match &overlay.shape {
            OverlayShape::Marker(position) => pen.marker(project(*position), color, selected),
            OverlayShape::Polyline(points) => {
                let path: Vec<Vec2> = points.iter().map(|p| project(*p)).collect();
                pen.path(&path, color, &style);
            }
            OverlayShape::Polygon(ring) => {
                let ring: Vec<Vec2> = ring.iter().map(|p| project(*p)).collect();
                let fill = base.with_alpha(style.fill_opacity);
                for (a, b) in hatch_lines(&ring, HATCH_SPACING_PX * pen.scale) {
                    pen.gizmos.line_2d(a, b, fill);
                }
                pen.path(&ring, color, &style);
                if let (Some(first), Some(last)) = (ring.first(), ring.last())
                    && first != last
                {
                    pen.stroke(*last, *first, color, &style);
                }
            }
        }
    }
}

/// Vertices placed so far plus a rubber band to the cursor
pub fn render_draw_preview(
    mut gizmos: Gizmos<OverlayGizmoGroup>,
    view: MapView,
    draw_tools: Res<DrawTools>,
) {
    let Some(tool) = draw_tools.armed() else {
        return;
    };
    let scale = view.scale();
    let color = kind_color(tool.kind).with_alpha(0.8);
    let points: Vec<Vec2> = tool.vertices.iter().map(|p| project(*p)).collect();

    for w in points.windows(2) {
        gizmos.line_2d(w[0], w[1], color);
    }
    for point in &points {
        gizmos.circle_2d(*point, 3.0 * scale, color);
    }

    if tool.kind == EntityKind::Polygon
        && tool.can_complete()
        && let Some(first) = points.first()
    {
        gizmos.circle_2d(*first, 6.0 * scale, Color::WHITE);
    }

    if let (Some(last), Some(cursor)) = (points.last(), view.cursor_world_pos()) {
        gizmos.line_2d(*last, cursor, color.with_alpha(0.5));
    }
}
