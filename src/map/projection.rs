//! Web Mercator projection between `LatLng` and world units.
//!
//! The world is a square of `2 * WORLD_HALF_EXTENT` units centred on (0, 0), with
//! north up. Latitudes are clamped to the usual Mercator limit.

use std::f64::consts::PI;

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::constants::WORLD_HALF_EXTENT;
use crate::geometry::LatLng;

/// Latitude beyond which Web Mercator is undefined in practice
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Project at full precision
pub fn project_precise(position: LatLng) -> DVec2 {
    let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = position.lng / 180.0;
    let y = (PI / 4.0 + lat / 2.0).tan().ln() / PI;
    DVec2::new(x, y) * WORLD_HALF_EXTENT
}

pub fn unproject_precise(world: DVec2) -> LatLng {
    let x = world.x / WORLD_HALF_EXTENT;
    let y = world.y / WORLD_HALF_EXTENT;
    let lng = x * 180.0;
    let lat = (2.0 * (y * PI).exp().atan() - PI / 2.0).to_degrees();
    LatLng::new(lat, lng)
}

pub fn project(position: LatLng) -> Vec2 {
    project_precise(position).as_vec2()
}

pub fn unproject(world: Vec2) -> LatLng {
    unproject_precise(world.as_dvec2())
}

/// Move a position by a world-space offset.
///
/// The position itself never passes through `f32`.
pub fn offset(position: LatLng, delta: Vec2) -> LatLng {
    unproject_precise(project_precise(position) + delta.as_dvec2())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: LatLng, b: LatLng) {
        assert!((a.lat - b.lat).abs() < 1e-3, "{:?} != {:?}", a, b);
        assert!((a.lng - b.lng).abs() < 1e-3, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_origin() {
        assert_eq!(project(LatLng::new(0.0, 0.0)), Vec2::ZERO);
    }

    #[test]
    fn test_north_is_up_east_is_right() {
        let istanbul = project(LatLng::new(41.0, 29.0));
        assert!(istanbul.x > 0.0);
        assert!(istanbul.y > 0.0);
    }

    #[test]
    fn test_antimeridian_maps_to_world_edge() {
        let edge = project(LatLng::new(0.0, 180.0));
        assert!((edge.x as f64 - WORLD_HALF_EXTENT).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        for position in [
            LatLng::new(41.0082, 28.9784),
            LatLng::new(39.9334, 32.8597),
            LatLng::new(-33.86, 151.2),
        ] {
            assert_close(unproject(project(position)), position);
        }
    }

    #[test]
    fn test_latitude_clamped() {
        let pole = project(LatLng::new(90.0, 0.0));
        assert!(pole.y.is_finite());
        assert!((pole.y as f64 - WORLD_HALF_EXTENT).abs() < 1.0);
    }

    #[test]
    fn test_offset_zero_is_identity() {
        let position = LatLng::new(40.0, 30.0);
        assert_close(offset(position, Vec2::ZERO), position);
    }

    #[test]
    fn test_offset_keeps_full_precision() {
        let position = LatLng::new(41.0082, 28.9784);
        let moved = offset(position, Vec2::ZERO);
        assert!((moved.lat - position.lat).abs() < 1e-9);
        assert!((moved.lng - position.lng).abs() < 1e-9);
    }
}
