/// Visual weight of an overlay, changed while it is being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub opacity: f32,
    pub fill_opacity: f32,
    pub weight: f32,
    pub dashed: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            fill_opacity: 0.2,
            weight: 2.0,
            dashed: false,
        }
    }
}

impl OverlayStyle {
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }
}
