//! No-op feedback adapter
//!
//! Used when haptics are disabled or the platform has no pulse backend.

use crate::application::ports::{FeedbackError, FeedbackGenerator, Pulse};

/// Feedback backend that does nothing
pub struct NoOpFeedback;

impl NoOpFeedback {
    /// Create a new no-op backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackGenerator for NoOpFeedback {
    fn prepare(&mut self, _pulse: Pulse) -> Result<(), FeedbackError> {
        Ok(())
    }

    fn fire(&mut self, _pulse: Pulse) -> Result<(), FeedbackError> {
        Ok(())
    }

    fn release(&mut self) {}
}
