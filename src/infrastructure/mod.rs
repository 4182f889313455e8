//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! feedback backends, the tiny-skia renderer and the config store.

pub mod config;
pub mod feedback;
pub mod render;

// Re-export adapters
pub use config::XdgConfigStore;
pub use feedback::{create_feedback, NoOpFeedback, RodioFeedback};
pub use render::{write_png, PixmapRenderer};
