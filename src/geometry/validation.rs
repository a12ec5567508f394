//! Acceptance rules for entity geometry and names.
//!
//! | kind    | rule                                                      |
//! |---------|-----------------------------------------------------------|
//! | Point   | exactly one pair of finite numbers                        |
//! | Line    | at least two pairs                                        |
//! | Polygon | 4 to 11 pairs (3-10 vertices + closure), first == last    |

use std::fmt;

use super::codec::parse_pair;
use super::{EntityKind, LatLng};

/// Smallest polygon ring: a triangle plus its closing pair.
pub const MIN_POLYGON_PAIRS: usize = 4;
/// Largest polygon ring: ten vertices plus the closing pair.
pub const MAX_POLYGON_PAIRS: usize = 11;
pub const MIN_LINE_PAIRS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    Missing,
    PointPairCount(usize),
    InvalidPair(String),
    LineTooShort(usize),
    PolygonVertexCount(usize),
    PolygonNotClosed,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Missing => write!(f, "Coordinates are required"),
            GeometryError::PointPairCount(_) => write!(
                f,
                "A point needs exactly one coordinate pair (e.g. \"28.9784 41.0082\")"
            ),
            GeometryError::InvalidPair(_) => write!(f, "Invalid coordinate format"),
            GeometryError::LineTooShort(_) => {
                write!(f, "A line needs at least 2 coordinate pairs")
            }
            GeometryError::PolygonVertexCount(_) => write!(
                f,
                "A polygon needs 3 to 10 vertices (4 to 11 coordinate pairs)"
            ),
            GeometryError::PolygonNotClosed => write!(
                f,
                "A polygon must be closed (first and last coordinate must match)"
            ),
        }
    }
}

/// Field-level errors reported by the entity form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub geometry: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.geometry.is_none()
    }
}

fn parse_pairs(pieces: &[&str]) -> Result<Vec<LatLng>, GeometryError> {
    pieces
        .iter()
        .map(|piece| parse_pair(piece).ok_or_else(|| GeometryError::InvalidPair(piece.to_string())))
        .collect()
}

/// Check geometry text against the rules for `kind`.
///
/// Returns the parsed positions on success.
pub fn validate_geometry(text: &str, kind: EntityKind) -> Result<Vec<LatLng>, GeometryError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GeometryError::Missing);
    }

    let pieces: Vec<&str> = text.split(',').map(str::trim).collect();

    match kind {
        EntityKind::Point => {
            if pieces.len() != 1 {
                return Err(GeometryError::PointPairCount(pieces.len()));
            }
            parse_pairs(&pieces)
        }
        EntityKind::Line => {
            if pieces.len() < MIN_LINE_PAIRS {
                return Err(GeometryError::LineTooShort(pieces.len()));
            }
            parse_pairs(&pieces)
        }
        EntityKind::Polygon => {
            if !(MIN_POLYGON_PAIRS..=MAX_POLYGON_PAIRS).contains(&pieces.len()) {
                return Err(GeometryError::PolygonVertexCount(pieces.len()));
            }
            let ring = parse_pairs(&pieces)?;
            if ring.first() != ring.last() {
                return Err(GeometryError::PolygonNotClosed);
            }
            Ok(ring)
        }
    }
}

/// Names must be non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        Err("Name is required".to_string())
    } else {
        Ok(())
    }
}

/// Validate both form fields independently.
pub fn validate_form(name: &str, geometry: &str, kind: EntityKind) -> FormErrors {
    FormErrors {
        name: validate_name(name).err(),
        geometry: validate_geometry(geometry, kind)
            .err()
            .map(|e| e.to_string()),
    }
}
