//! Domain layer - Core button logic
//!
//! Contains geometry, style value objects, the interaction state machine
//! and domain errors. This layer has no dependencies on external systems.

pub mod button;
pub mod config;
pub mod error;
pub mod geometry;
pub mod style;

// Re-export common types
pub use button::{ButtonState, InteractionState, ReleaseLocation, Transition};
pub use config::ButtonConfig;
pub use error::*;
pub use geometry::{InnerShape, Point, Rect, RoundedRect};
pub use style::{Color, HapticsMode, StyleConfig};
