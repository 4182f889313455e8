//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod feedback;
pub mod renderer;

// Re-export common types
pub use config::ConfigStore;
pub use feedback::{FeedbackError, FeedbackGenerator, Pulse};
pub use renderer::{RenderError, SceneRenderer};
