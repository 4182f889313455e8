//! Application layer - Button controller and port interfaces
//!
//! Contains the record button controller, its animation timeline and
//! feedback coordination, plus the trait definitions for external
//! system interactions.

pub mod animation;
pub mod feedback;
pub mod ports;
pub mod record_button;
pub mod scene;

// Re-export the controller
pub use animation::{Easing, ShapeAnimator};
pub use feedback::FeedbackCoordinator;
pub use record_button::{RecordButton, SelectionCallback};
pub use scene::{InnerFill, RingStroke, Scene};
