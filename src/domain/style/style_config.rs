//! Visual style of the button

use std::time::Duration;

use super::color::Color;

/// Side of the inner square relative to the bounds
pub const SQUARE_WIDTH_PERCENT: f32 = 0.68;

/// Corner radius of the inner square relative to its shorter side
pub const SQUARE_CORNER_RADIUS_PERCENT: f32 = 0.13;

/// How much the inner shape shrinks while pressed, relative to its width
pub const PRESSED_SHRINK_PERCENT: f32 = 0.05;

pub const DEFAULT_RING_WIDTH: f32 = 6.0;
pub const DEFAULT_RING_SPACING: f32 = 2.0;
pub const DEFAULT_TRANSITION_SECS: f32 = 0.15;

/// Longest accepted transition; larger values are capped
pub const MAX_TRANSITION_SECS: f32 = 60.0;

/// Style properties driving geometry and paint.
///
/// `ring_width`, `ring_spacing` and `transition_duration` are kept
/// non-negative by the setters, and the duration never exceeds
/// [`MAX_TRANSITION_SECS`]. The percentages are fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    pub inner_color: Color,
    pub ring_color: Color,
    ring_width: f32,
    ring_spacing: f32,
    pub square_width_percent: f32,
    pub square_corner_radius_percent: f32,
    pub pressed_shrink_percent: f32,
    transition_duration: f32,
}

impl StyleConfig {
    pub fn ring_width(&self) -> f32 {
        self.ring_width
    }

    pub fn set_ring_width(&mut self, width: f32) {
        self.ring_width = non_negative(width);
    }

    pub fn ring_spacing(&self) -> f32 {
        self.ring_spacing
    }

    pub fn set_ring_spacing(&mut self, spacing: f32) {
        self.ring_spacing = non_negative(spacing);
    }

    /// Transition duration in seconds
    pub fn transition_duration(&self) -> f32 {
        self.transition_duration
    }

    /// Zero means transitions apply instantly
    pub fn set_transition_duration(&mut self, secs: f32) {
        self.transition_duration = non_negative(secs).min(MAX_TRANSITION_SECS);
    }

    pub fn transition(&self) -> Duration {
        Duration::try_from_secs_f32(self.transition_duration).unwrap_or(Duration::ZERO)
    }

    /// Distance from the bounds edge to the inner shape
    pub fn ring_clearance(&self) -> f32 {
        self.ring_width + self.ring_spacing
    }

    pub fn with_ring_width(mut self, width: f32) -> Self {
        self.set_ring_width(width);
        self
    }

    pub fn with_ring_spacing(mut self, spacing: f32) -> Self {
        self.set_ring_spacing(spacing);
        self
    }

    pub fn with_transition_duration(mut self, secs: f32) -> Self {
        self.set_transition_duration(secs);
        self
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            inner_color: Color::RECORD_RED,
            ring_color: Color::WHITE,
            ring_width: DEFAULT_RING_WIDTH,
            ring_spacing: DEFAULT_RING_SPACING,
            square_width_percent: SQUARE_WIDTH_PERCENT,
            square_corner_radius_percent: SQUARE_CORNER_RADIUS_PERCENT,
            pressed_shrink_percent: PRESSED_SHRINK_PERCENT,
            transition_duration: DEFAULT_TRANSITION_SECS,
        }
    }
}

/// NaN, infinities and negatives become zero
fn non_negative(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
