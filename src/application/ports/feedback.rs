//! Feedback port for tactile/audible pulses
//!
//! Backends warm up on `prepare`, emit on `fire` and drop whatever they hold
//! on `release`. Calls happen on the UI thread and must not block.

use thiserror::Error;

/// Kind of pulse to emit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pulse {
    /// Neutral tick used for selection changes
    Selection,
    /// Impact pulse, intensity in `0.0..=1.0`
    Impact { intensity: f32 },
}

/// Errors a feedback backend may report.
/// The coordinator absorbs these; they never reach the host.
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// No output device available on this platform
    #[error("Feedback device not available: {0}")]
    DeviceNotAvailable(String),

    /// The pulse could not be emitted
    #[error("Pulse failed: {0}")]
    PulseFailed(String),
}

/// Port trait for a feedback backend
pub trait FeedbackGenerator {
    /// Warm the backend up so the next `fire` has minimal latency
    fn prepare(&mut self, pulse: Pulse) -> Result<(), FeedbackError>;

    /// Emit a pulse. Backends prepare lazily when not yet prepared.
    fn fire(&mut self, pulse: Pulse) -> Result<(), FeedbackError>;

    /// Drop any held engine handles
    fn release(&mut self);
}

/// Blanket implementation for boxed feedback backends
impl<T: FeedbackGenerator + ?Sized> FeedbackGenerator for Box<T> {
    fn prepare(&mut self, pulse: Pulse) -> Result<(), FeedbackError> {
        self.as_mut().prepare(pulse)
    }

    fn fire(&mut self, pulse: Pulse) -> Result<(), FeedbackError> {
        self.as_mut().fire(pulse)
    }

    fn release(&mut self) {
        self.as_mut().release()
    }
}
