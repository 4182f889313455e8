//! Feedback coordinator
//!
//! Maps the configured [`HapticsMode`] onto prepare/fire/release calls of a
//! feedback backend. Backend failures are logged and otherwise ignored.

use tracing::debug;

use crate::application::ports::{FeedbackError, FeedbackGenerator, Pulse};
use crate::domain::style::HapticsMode;

/// Drives a feedback backend for one button
pub struct FeedbackCoordinator {
    mode: HapticsMode,
    backend: Option<Box<dyn FeedbackGenerator>>,
    prepared: bool,
}

impl FeedbackCoordinator {
    /// Coordinator with no backend; every call is a no-op
    pub fn disabled() -> Self {
        Self {
            mode: HapticsMode::None,
            backend: None,
            prepared: false,
        }
    }

    pub fn new(mode: HapticsMode, backend: Box<dyn FeedbackGenerator>) -> Self {
        Self {
            mode: mode.normalized(),
            backend: Some(backend),
            prepared: false,
        }
    }

    pub fn mode(&self) -> HapticsMode {
        self.mode
    }

    /// Switch mode, dropping any handles prepared for the old one
    pub fn set_mode(&mut self, mode: HapticsMode) {
        self.release();
        self.mode = mode.normalized();
    }

    /// Replace the backend, releasing the old one first
    pub fn set_backend(&mut self, backend: Box<dyn FeedbackGenerator>) {
        self.release();
        self.backend = Some(backend);
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Press-down: warm the backend up. Highlight also pulses right away.
    pub fn prepare(&mut self) {
        let Some(pulse) = self.pulse() else {
            return;
        };
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        absorb("prepare", backend.prepare(pulse));
        self.prepared = true;

        if matches!(self.mode, HapticsMode::Highlight(_)) {
            absorb("fire", backend.fire(pulse));
        }
    }

    /// Selection toggled: emit the mode's pulse
    pub fn fire(&mut self) {
        let Some(pulse) = self.pulse() else {
            return;
        };
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        if !self.prepared {
            absorb("prepare", backend.prepare(pulse));
            self.prepared = true;
        }
        absorb("fire", backend.fire(pulse));
    }

    /// Touch ended: drop held handles so the next press starts fresh
    pub fn release(&mut self) {
        if !self.prepared {
            return;
        }
        if let Some(backend) = self.backend.as_mut() {
            backend.release();
        }
        self.prepared = false;
    }

    fn pulse(&self) -> Option<Pulse> {
        match self.mode {
            HapticsMode::None => None,
            HapticsMode::Selection => Some(Pulse::Selection),
            HapticsMode::Highlight(intensity) => Some(Pulse::Impact { intensity }),
        }
    }
}

impl Default for FeedbackCoordinator {
    fn default() -> Self {
        Self::disabled()
    }
}

impl std::fmt::Debug for FeedbackCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackCoordinator")
            .field("mode", &self.mode)
            .field("has_backend", &self.backend.is_some())
            .field("prepared", &self.prepared)
            .finish()
    }
}

fn absorb(action: &str, result: Result<(), FeedbackError>) {
    if let Err(e) = result {
        debug!(action, error = %e, "feedback backend unavailable");
    }
}
