use crate::geometry::EntityKind;

/// Which geometry kind (if any) the operator is currently drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Off,
    Drawing(EntityKind),
}

impl DrawingMode {
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            DrawingMode::Off => None,
            DrawingMode::Drawing(kind) => Some(*kind),
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, DrawingMode::Drawing(_))
    }

    /// Toolbar hint for the active mode
    pub fn hint(&self) -> &'static str {
        match self {
            DrawingMode::Off => "",
            DrawingMode::Drawing(EntityKind::Point) => "Click the map to place a point",
            DrawingMode::Drawing(EntityKind::Line) => "Click two points to draw a line",
            DrawingMode::Drawing(EntityKind::Polygon) => {
                "Click vertices, then click the first vertex or press Enter to close"
            }
        }
    }
}

impl From<EntityKind> for DrawingMode {
    fn from(kind: EntityKind) -> Self {
        DrawingMode::Drawing(kind)
    }
}
