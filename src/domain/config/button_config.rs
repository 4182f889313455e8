//! Button configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::style::style_config::{
    DEFAULT_RING_SPACING, DEFAULT_RING_WIDTH, DEFAULT_TRANSITION_SECS,
};
use crate::domain::style::{Color, HapticsMode, StyleConfig};

/// Default rendered size in pixels
pub const DEFAULT_SIZE: u32 = 96;

/// Button configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub inner_color: Option<String>,
    pub ring_color: Option<String>,
    pub ring_width: Option<f32>,
    pub ring_spacing: Option<f32>,
    pub transition_duration: Option<f32>,
    pub haptics: Option<String>,
    pub size: Option<u32>,
}

impl ButtonConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            inner_color: Some(Color::RECORD_RED.to_string()),
            ring_color: Some(Color::WHITE.to_string()),
            ring_width: Some(DEFAULT_RING_WIDTH),
            ring_spacing: Some(DEFAULT_RING_SPACING),
            transition_duration: Some(DEFAULT_TRANSITION_SECS),
            haptics: Some(HapticsMode::None.to_string()),
            size: Some(DEFAULT_SIZE),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            inner_color: other.inner_color.or(self.inner_color),
            ring_color: other.ring_color.or(self.ring_color),
            ring_width: other.ring_width.or(self.ring_width),
            ring_spacing: other.ring_spacing.or(self.ring_spacing),
            transition_duration: other.transition_duration.or(self.transition_duration),
            haptics: other.haptics.or(self.haptics),
            size: other.size.or(self.size),
        }
    }

    /// Get inner colour, or the default red if not set/invalid
    pub fn inner_color_or_default(&self) -> Color {
        parse_or(self.inner_color.as_deref(), Color::RECORD_RED)
    }

    /// Get ring colour, or white if not set/invalid
    pub fn ring_color_or_default(&self) -> Color {
        parse_or(self.ring_color.as_deref(), Color::WHITE)
    }

    pub fn ring_width_or_default(&self) -> f32 {
        self.ring_width.unwrap_or(DEFAULT_RING_WIDTH)
    }

    pub fn ring_spacing_or_default(&self) -> f32 {
        self.ring_spacing.unwrap_or(DEFAULT_RING_SPACING)
    }

    pub fn transition_duration_or_default(&self) -> f32 {
        self.transition_duration.unwrap_or(DEFAULT_TRANSITION_SECS)
    }

    /// Get haptics mode, or none if not set/invalid
    pub fn haptics_or_default(&self) -> HapticsMode {
        parse_or(self.haptics.as_deref(), HapticsMode::None)
    }

    pub fn size_or_default(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    /// Build the style this config describes
    pub fn to_style(&self) -> StyleConfig {
        let mut style = StyleConfig::default()
            .with_ring_width(self.ring_width_or_default())
            .with_ring_spacing(self.ring_spacing_or_default())
            .with_transition_duration(self.transition_duration_or_default());
        style.inner_color = self.inner_color_or_default();
        style.ring_color = self.ring_color_or_default();
        style
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<&str>, fallback: T) -> T {
    value.and_then(|s| s.parse().ok()).unwrap_or(fallback)
}
