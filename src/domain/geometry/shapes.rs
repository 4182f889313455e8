//! Ring and inner-shape boundaries

use serde::{Deserialize, Serialize};

use super::rect::{lerp, Rect};
use crate::domain::style::StyleConfig;

/// Shape of the inner fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InnerShape {
    Circle,
    RoundedSquare,
}

impl InnerShape {
    /// Rounded square while selected (recording), circle otherwise
    pub const fn for_selection(selected: bool) -> Self {
        if selected {
            Self::RoundedSquare
        } else {
            Self::Circle
        }
    }

    /// Corner radius this shape uses inside `rect`
    pub fn corner_radius(&self, rect: &Rect, style: &StyleConfig) -> f32 {
        let min_side = rect.min_side().max(0.0);
        let radius = match self {
            Self::Circle => min_side / 2.0,
            Self::RoundedSquare => min_side * style.square_corner_radius_percent,
        };
        radius.clamp(0.0, min_side / 2.0)
    }
}

/// A rect with uniformly rounded corners.
///
/// A radius of half the shorter side yields a circle (for square rects),
/// so every inner shape is representable and morphs continuously.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: f32,
}

impl RoundedRect {
    pub const fn new(rect: Rect, corner_radius: f32) -> Self {
        Self {
            rect,
            corner_radius,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rect.is_empty()
    }

    pub fn lerp(&self, to: &RoundedRect, t: f32) -> RoundedRect {
        RoundedRect {
            rect: self.rect.lerp(&to.rect, t),
            corner_radius: lerp(self.corner_radius, to.corner_radius, t),
        }
    }
}

/// Outer ring rect, inset by half the ring width so the stroke stays inside `bounds`
pub fn outer_ring_rect(bounds: Rect, ring_width: f32) -> Rect {
    let half = ring_width / 2.0;
    bounds.inset(half, half)
}

/// Bounding box of the idle circle, clear of the ring and its spacing
pub fn circle_resting_rect(bounds: Rect, ring_width: f32, ring_spacing: f32) -> Rect {
    let clearance = ring_width + ring_spacing;
    bounds.inset(clearance, clearance)
}

/// Bounding box of the selected square: a centred region sized at
/// `square_width_percent` of the bounds, then inset by the ring clearance
pub fn square_resting_rect(
    bounds: Rect,
    ring_width: f32,
    ring_spacing: f32,
    square_width_percent: f32,
) -> Rect {
    let clearance = ring_width + ring_spacing;
    let dx = bounds.width * (1.0 - square_width_percent) / 2.0;
    let dy = bounds.height * (1.0 - square_width_percent) / 2.0;
    bounds.inset(dx + clearance, dy + clearance)
}

/// Resting rect shrunk by `width * pressed_shrink_percent` on both axes
pub fn pressed_rect(resting: Rect, pressed_shrink_percent: f32) -> Rect {
    let shrink = resting.width * pressed_shrink_percent;
    resting.inset(shrink, shrink)
}

/// Inner shape shown when no touch is active
pub fn resting_shape(bounds: Rect, style: &StyleConfig, selected: bool) -> RoundedRect {
    let shape = InnerShape::for_selection(selected);
    let rect = match shape {
        InnerShape::Circle => {
            circle_resting_rect(bounds, style.ring_width(), style.ring_spacing())
        }
        InnerShape::RoundedSquare => square_resting_rect(
            bounds,
            style.ring_width(),
            style.ring_spacing(),
            style.square_width_percent,
        ),
    };
    RoundedRect::new(rect, shape.corner_radius(&rect, style))
}

/// Inner shape shown while a touch is held
pub fn pressed_shape(bounds: Rect, style: &StyleConfig, selected: bool) -> RoundedRect {
    let shape = InnerShape::for_selection(selected);
    let resting = resting_shape(bounds, style, selected);
    let rect = pressed_rect(resting.rect, style.pressed_shrink_percent);
    RoundedRect::new(rect, shape.corner_radius(&rect, style))
}
