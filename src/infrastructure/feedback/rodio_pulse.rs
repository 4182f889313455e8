//! Rodio-based feedback adapter
//!
//! Emits pulses as short synthesized tones. Desktop hosts have no tactile
//! actuator, so an audible click stands in for the tick/impact.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use tracing::trace;

use crate::application::ports::{FeedbackError, FeedbackGenerator, Pulse};

/// Output stream and sink held between prepare and release
struct Engine {
    _stream: OutputStream,
    sink: Sink,
}

/// Feedback implementation using rodio
pub struct RodioFeedback {
    engine: Option<Engine>,
    /// Released engine kept alive until its last pulse finishes playing
    draining: Option<Engine>,
}

impl RodioFeedback {
    /// Create a new rodio-based backend. No device is opened until `prepare`.
    pub fn new() -> Self {
        Self {
            engine: None,
            draining: None,
        }
    }

    fn open() -> Result<Engine, FeedbackError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| FeedbackError::DeviceNotAvailable(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| FeedbackError::PulseFailed(e.to_string()))?;
        Ok(Engine {
            _stream: stream,
            sink,
        })
    }
}

impl Default for RodioFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackGenerator for RodioFeedback {
    fn prepare(&mut self, _pulse: Pulse) -> Result<(), FeedbackError> {
        // A finished pulse from the previous interaction no longer needs its stream
        if self.draining.as_ref().is_some_and(|engine| engine.sink.empty()) {
            self.draining = None;
        }
        if self.engine.is_none() {
            self.engine = Some(Self::open()?);
            trace!("feedback output stream opened");
        }
        Ok(())
    }

    fn fire(&mut self, pulse: Pulse) -> Result<(), FeedbackError> {
        self.prepare(pulse)?;
        let engine = self
            .engine
            .as_ref()
            .ok_or_else(|| FeedbackError::PulseFailed("output stream not open".to_string()))?;

        match pulse {
            Pulse::Selection => engine.sink.append(click(1760.0, 18, 0.2)),
            Pulse::Impact { intensity } => {
                engine.sink.append(click(180.0, 40, 0.15 + 0.35 * intensity))
            }
        }
        Ok(())
    }

    fn release(&mut self) {
        if let Some(engine) = self.engine.take() {
            if engine.sink.empty() {
                drop(engine);
            } else {
                self.draining = Some(engine);
            }
        }
    }
}

/// Short tone with a quick fade in, so it reads as a click rather than a beep
fn click(freq: f32, duration_ms: u64, amplitude: f32) -> impl Source<Item = f32> + Send {
    let fade_ms = (duration_ms / 4).max(1);
    SineWave::new(freq)
        .take_duration(Duration::from_millis(duration_ms))
        .fade_in(Duration::from_millis(fade_ms))
        .amplify(amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: These tests require audio hardware and may not work in CI
    // They are marked as ignored by default

    #[test]
    fn new_backend_holds_no_stream() {
        let mut feedback = RodioFeedback::new();
        assert!(feedback.engine.is_none());
        feedback.release();
        assert!(feedback.engine.is_none());
        assert!(feedback.draining.is_none());
    }

    #[test]
    #[ignore = "Requires audio hardware"]
    fn can_fire_selection_pulse() {
        let mut feedback = RodioFeedback::new();
        assert!(feedback.prepare(Pulse::Selection).is_ok());
        assert!(feedback.fire(Pulse::Selection).is_ok());
        feedback.release();
        assert!(feedback.engine.is_none());
    }

    #[test]
    #[ignore = "Requires audio hardware"]
    fn can_fire_impact_without_prepare() {
        let mut feedback = RodioFeedback::new();
        assert!(feedback.fire(Pulse::Impact { intensity: 0.8 }).is_ok());
        feedback.release();
    }
}
