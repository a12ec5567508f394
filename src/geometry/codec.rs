//! Canonical text encoding of entity geometry.
//!
//! A geometry is a `", "`-separated list of pairs, each pair `"lng lat"`:
//!
//! ```text
//! 28.5 40.5, 29.5 40.5, 29.5 41.5, 28.5 40.5
//! ```
//!
//! This is the only representation that crosses into the remote store.

use bevy::log::warn;
use serde::{Deserialize, Serialize};

use super::EntityKind;

/// A position in map-widget order (latitude first).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Round both components to `decimals` places
    pub fn rounded(&self, decimals: i32) -> Self {
        let factor = 10f64.powi(decimals);
        Self::new(
            (self.lat * factor).round() / factor,
            (self.lng * factor).round() / factor,
        )
    }
}

/// Parse a single `"lng lat"` pair.
pub(super) fn parse_pair(piece: &str) -> Option<LatLng> {
    let mut parts = piece.split_whitespace();
    let lng = parts.next()?.parse::<f64>().ok()?;
    let lat = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let position = LatLng::new(lat, lng);
    position.is_finite().then_some(position)
}

/// Decode geometry text into widget-order positions.
///
/// Never fails: malformed text is logged and yields an empty list, which callers
/// treat as "nothing to render".
pub fn decode(text: &str, kind: EntityKind) -> Vec<LatLng> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut positions = Vec::new();
    for piece in text.split(',') {
        match parse_pair(piece.trim()) {
            Some(position) => positions.push(position),
            None => {
                warn!(
                    "Error parsing {} geometry {:?}: bad coordinate pair {:?}",
                    kind.display_name(),
                    text,
                    piece.trim()
                );
                return Vec::new();
            }
        }
    }
    positions
}

/// Encode widget-order positions as canonical geometry text.
pub fn encode(positions: &[LatLng]) -> String {
    positions
        .iter()
        .map(|p| format!("{} {}", p.lng, p.lat))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Encode a polygon ring, appending the first vertex when the ring is open.
pub fn encode_ring(ring: &[LatLng]) -> String {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if first != last => {
            let mut closed = ring.to_vec();
            closed.push(*first);
            encode(&closed)
        }
        _ => encode(ring),
    }
}
