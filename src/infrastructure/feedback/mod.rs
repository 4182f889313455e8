//! Feedback infrastructure adapters
//!
//! Provides the pulse backends behind the feedback port.

mod noop;
mod rodio_pulse;

pub use noop::NoOpFeedback;
pub use rodio_pulse::RodioFeedback;

use crate::application::ports::FeedbackGenerator;
use crate::domain::style::HapticsMode;

/// Create a feedback backend suited to the haptics mode
pub fn create_feedback(mode: HapticsMode) -> Box<dyn FeedbackGenerator> {
    if mode.is_enabled() {
        Box::new(RodioFeedback::new())
    } else {
        Box::new(NoOpFeedback::new())
    }
}
