//! Style value objects: colours, ring metrics and haptics mode

pub mod color;
pub mod haptics;
pub mod style_config;

pub use color::Color;
pub use haptics::HapticsMode;
pub use style_config::{StyleConfig, MAX_TRANSITION_SECS};
