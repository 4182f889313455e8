//! Render model handed to renderers

use serde::Serialize;

use crate::domain::geometry::{InnerShape, Rect, RoundedRect};
use crate::domain::style::Color;

/// Stroked outer ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingStroke {
    /// Path rect; the stroke is centred on its edge
    pub rect: Rect,
    pub line_width: f32,
    pub color: Color,
}

/// Filled inner shape as currently presented
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InnerFill {
    pub shape: RoundedRect,
    /// Shape the fill is settling on
    pub resting_kind: InnerShape,
    pub color: Color,
}

/// Everything needed to draw one frame of the button.
/// Layers are `None` until the control has non-empty bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scene {
    pub bounds: Rect,
    pub selected: bool,
    pub pressed: bool,
    pub animating: bool,
    pub ring: Option<RingStroke>,
    pub inner: Option<InnerFill>,
}

impl Scene {
    /// True when nothing would be drawn
    pub fn is_blank(&self) -> bool {
        let ring_visible = self
            .ring
            .is_some_and(|ring| ring.line_width > 0.0 && !ring.rect.is_empty());
        let inner_visible = self.inner.is_some_and(|inner| !inner.shape.is_empty());
        !(ring_visible || inner_visible)
    }
}
