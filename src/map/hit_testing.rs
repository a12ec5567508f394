//! Hit testing functions for picking overlays under the pointer.

use bevy::prelude::*;

use crate::constants::{LINE_PICK_TOLERANCE_PX, PICK_RADIUS_PX};

use super::overlay::{MapOverlay, OverlayShape};
use super::projection::project;

/// Check if a point is within a given distance of a line segment
pub fn point_near_segment(point: Vec2, seg_start: Vec2, seg_end: Vec2, threshold: f32) -> bool {
    let line_vec = seg_end - seg_start;
    let line_len_sq = line_vec.length_squared();

    if line_len_sq < 0.0001 {
        return point.distance(seg_start) <= threshold;
    }

    // Project point onto line, clamped to segment
    let t = ((point - seg_start).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    let projection = seg_start + line_vec * t;

    point.distance(projection) <= threshold
}

/// Even-odd ray cast; the ring may or may not repeat its first vertex
pub fn point_in_ring(point: Vec2, ring: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = ring.len().wrapping_sub(1);
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn near_path(point: Vec2, path: &[Vec2], threshold: f32) -> bool {
    path.windows(2)
        .any(|w| point_near_segment(point, w[0], w[1], threshold))
}

/// Does `world` hit the overlay at camera scale `scale` (world units per pixel)?
pub fn overlay_hit(overlay: &MapOverlay, world: Vec2, scale: f32) -> bool {
    match &overlay.shape {
        OverlayShape::Marker(position) => {
            project(*position).distance(world) <= PICK_RADIUS_PX * scale
        }
        OverlayShape::Polyline(points) => {
            let path: Vec<Vec2> = points.iter().map(|p| project(*p)).collect();
            near_path(world, &path, LINE_PICK_TOLERANCE_PX * scale)
        }
        OverlayShape::Polygon(ring) => {
            let ring: Vec<Vec2> = ring.iter().map(|p| project(*p)).collect();
            point_in_ring(world, &ring) || near_path(world, &ring, LINE_PICK_TOLERANCE_PX * scale)
        }
    }
}

fn pick_priority(overlay: &MapOverlay) -> u8 {
    match overlay.shape {
        OverlayShape::Marker(_) => 0,
        OverlayShape::Polyline(_) => 1,
        OverlayShape::Polygon(_) => 2,
    }
}

/// Topmost hit: markers over lines over polygons.
pub fn pick_overlay<'a, T: Copy>(
    candidates: impl IntoIterator<Item = (T, &'a MapOverlay)>,
    world: Vec2,
    scale: f32,
) -> Option<T> {
    candidates
        .into_iter()
        .filter(|(_, overlay)| overlay_hit(overlay, world, scale))
        .min_by_key(|(_, overlay)| pick_priority(overlay))
        .map(|(id, _)| id)
}
