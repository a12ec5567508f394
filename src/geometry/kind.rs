use serde::{Deserialize, Serialize};

/// Discriminates how geometry text is interpreted.
///
/// Serialized as its numeric wire value (`1`, `2`, `3`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum EntityKind {
    #[default]
    Point = 1,
    Line = 2,
    Polygon = 3,
}

impl EntityKind {
    pub fn all() -> &'static [EntityKind] {
        &[EntityKind::Point, EntityKind::Line, EntityKind::Polygon]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Point => "Point",
            EntityKind::Line => "Line",
            EntityKind::Polygon => "Polygon",
        }
    }

    /// Plural label used by the filter panel
    pub fn plural_name(&self) -> &'static str {
        match self {
            EntityKind::Point => "Points",
            EntityKind::Line => "Lines",
            EntityKind::Polygon => "Polygons",
        }
    }

    /// Example geometry shown as a hint in the entity form
    pub fn geometry_placeholder(&self) -> &'static str {
        match self {
            EntityKind::Point => "28.9784 41.0082",
            EntityKind::Line => "28.9784 41.0082, 32.8597 39.9334",
            EntityKind::Polygon => "28.5 40.5, 29.5 40.5, 29.5 41.5, 28.5 41.5, 28.5 40.5",
        }
    }

    /// Format help shown under the geometry field
    pub fn geometry_help(&self) -> &'static str {
        match self {
            EntityKind::Point => "Format: \"lng lat\"",
            EntityKind::Line => "Format: \"lng1 lat1, lng2 lat2\"",
            EntityKind::Polygon => "Closed ring of 3-10 vertices, e.g. \"x1 y1, x2 y2, x3 y3, x1 y1\"",
        }
    }

    /// Wire value used by the remote store
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl From<EntityKind> for u8 {
    fn from(kind: EntityKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for EntityKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(EntityKind::Point),
            2 => Ok(EntityKind::Line),
            3 => Ok(EntityKind::Polygon),
            other => Err(format!("unknown coordinate type {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(EntityKind::Point.code(), 1);
        assert_eq!(EntityKind::Line.code(), 2);
        assert_eq!(EntityKind::Polygon.code(), 3);
    }

    #[test]
    fn test_try_from_rejects_unknown() {
        assert_eq!(EntityKind::try_from(3), Ok(EntityKind::Polygon));
        assert!(EntityKind::try_from(0).is_err());
        assert!(EntityKind::try_from(4).is_err());
    }

    #[test]
    fn test_serde_uses_numeric_value() {
        let json = serde_json::to_string(&EntityKind::Line).unwrap();
        assert_eq!(json, "2");

        let parsed: EntityKind = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, EntityKind::Point);

        assert!(serde_json::from_str::<EntityKind>("9").is_err());
    }

    #[test]
    fn test_all_returns_three_kinds() {
        assert_eq!(EntityKind::all().len(), 3);
    }
}
