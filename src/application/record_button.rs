//! Record button controller
//!
//! Owns the two drawable layers (outer ring and inner shape), the
//! interaction state machine and the feedback coordinator. Geometry is
//! recomputed only when a style property or the bounds change; the
//! animation timeline is stepped separately by [`RecordButton::advance`].

use std::time::Duration;

use tracing::{debug, trace};

use crate::application::animation::ShapeAnimator;
use crate::application::feedback::FeedbackCoordinator;
use crate::application::ports::FeedbackGenerator;
use crate::application::scene::{InnerFill, RingStroke, Scene};
use crate::domain::button::{ButtonState, InteractionState, ReleaseLocation, Transition};
use crate::domain::geometry::{
    outer_ring_rect, pressed_shape, resting_shape, InnerShape, Point, Rect, RoundedRect,
};
use crate::domain::style::{Color, HapticsMode, StyleConfig};

/// Observer for selection changes; receives the new value
pub type SelectionCallback = Box<dyn FnMut(bool)>;

#[derive(Debug)]
struct RingLayer {
    rect: Rect,
    line_width: f32,
    color: Color,
}

#[derive(Debug)]
struct InnerLayer {
    color: Color,
    animator: ShapeAnimator,
}

/// Animated record/stop button
pub struct RecordButton {
    bounds: Rect,
    style: StyleConfig,
    interaction: InteractionState,
    feedback: FeedbackCoordinator,
    ring: RingLayer,
    inner: InnerLayer,
    laid_out: bool,
    revision: u64,
    observers: Vec<SelectionCallback>,
}

impl RecordButton {
    /// Button with default style and no feedback backend
    pub fn new() -> Self {
        Self::with_style(StyleConfig::default())
    }

    pub fn with_style(style: StyleConfig) -> Self {
        Self {
            bounds: Rect::ZERO,
            style,
            interaction: InteractionState::default(),
            feedback: FeedbackCoordinator::disabled(),
            ring: RingLayer {
                rect: Rect::ZERO,
                line_width: style.ring_width(),
                color: style.ring_color,
            },
            inner: InnerLayer {
                color: style.inner_color,
                animator: ShapeAnimator::default(),
            },
            laid_out: false,
            revision: 0,
            observers: Vec::new(),
        }
    }

    /// Attach a feedback backend driven according to `mode`
    pub fn with_feedback(mut self, mode: HapticsMode, backend: Box<dyn FeedbackGenerator>) -> Self {
        self.feedback = FeedbackCoordinator::new(mode, backend);
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.set_bounds(bounds);
        self
    }

    // --- Layout ---

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Layout event. Geometry is first computed once the bounds are non-empty.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.recompute_and_apply();
    }

    // --- Style properties ---

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn inner_color(&self) -> Color {
        self.style.inner_color
    }

    pub fn set_inner_color(&mut self, color: Color) {
        if color == self.style.inner_color {
            return;
        }
        self.style.inner_color = color;
        self.inner.color = color;
        self.revision += 1;
    }

    pub fn ring_color(&self) -> Color {
        self.style.ring_color
    }

    pub fn set_ring_color(&mut self, color: Color) {
        if color == self.style.ring_color {
            return;
        }
        self.style.ring_color = color;
        self.ring.color = color;
        self.revision += 1;
    }

    pub fn ring_width(&self) -> f32 {
        self.style.ring_width()
    }

    /// Negative and non-finite widths are treated as zero
    pub fn set_ring_width(&mut self, width: f32) {
        let before = self.style.ring_width();
        self.style.set_ring_width(width);
        if self.style.ring_width() != before {
            self.recompute_and_apply();
        }
    }

    pub fn ring_spacing(&self) -> f32 {
        self.style.ring_spacing()
    }

    /// Negative and non-finite spacings are treated as zero
    pub fn set_ring_spacing(&mut self, spacing: f32) {
        let before = self.style.ring_spacing();
        self.style.set_ring_spacing(spacing);
        if self.style.ring_spacing() != before {
            self.recompute_and_apply();
        }
    }

    /// Transition duration in seconds
    pub fn transition_duration(&self) -> f32 {
        self.style.transition_duration()
    }

    /// Applies to the next transition; non-positive values make transitions instant
    pub fn set_transition_duration(&mut self, secs: f32) {
        self.style.set_transition_duration(secs);
    }

    pub fn haptics_mode(&self) -> HapticsMode {
        self.feedback.mode()
    }

    pub fn set_haptics_mode(&mut self, mode: HapticsMode) {
        self.feedback.set_mode(mode);
    }

    /// Replace the feedback backend, keeping the current mode
    pub fn set_feedback_backend(&mut self, backend: Box<dyn FeedbackGenerator>) {
        self.feedback.set_backend(backend);
    }

    // --- State ---

    pub fn state(&self) -> ButtonState {
        self.interaction.state()
    }

    pub fn is_selected(&self) -> bool {
        self.interaction.is_selected()
    }

    pub fn is_pressed(&self) -> bool {
        self.interaction.is_pressed()
    }

    /// Programmatic start/stop. Writing the current value does nothing;
    /// otherwise the shape animates, feedback fires and observers are notified.
    pub fn set_selected(&mut self, selected: bool) {
        if let Some(transition) = self.interaction.set_selected(selected) {
            self.handle_transition(transition);
        }
    }

    /// Register an observer for selection changes
    pub fn on_selection_changed(&mut self, callback: impl FnMut(bool) + 'static) {
        self.observers.push(Box::new(callback));
    }

    // --- Pointer events ---

    /// Touch down. Returns true when the press was accepted.
    pub fn pointer_down(&mut self, location: Point) -> bool {
        let inside = self.hit_test(location);
        match self.interaction.press(inside) {
            Some(transition) => {
                self.handle_transition(transition);
                true
            }
            None => false,
        }
    }

    /// Touch up at `location`. Toggles only when released inside the bounds.
    pub fn pointer_up(&mut self, location: Point) {
        let location = ReleaseLocation::from_inside(self.hit_test(location));
        if let Some(transition) = self.interaction.release(location) {
            self.handle_transition(transition);
        }
    }

    /// Touch cancelled by the system
    pub fn pointer_cancel(&mut self) {
        if let Some(transition) = self.interaction.cancel() {
            self.handle_transition(transition);
        }
    }

    pub fn hit_test(&self, location: Point) -> bool {
        self.bounds.contains(location)
    }

    // --- Animation timeline ---

    /// Step the animation timeline. Returns true while still animating.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.inner.animator.advance(dt)
    }

    pub fn is_animating(&self) -> bool {
        self.inner.animator.is_animating()
    }

    /// Jump to the end of the running animation
    pub fn finish_animation(&mut self) {
        let target = self.inner.animator.target();
        self.inner.animator.snap_to(target);
    }

    /// Inner shape currently on screen
    pub fn presented_shape(&self) -> RoundedRect {
        self.inner.animator.presented()
    }

    /// Inner shape the current animation ends on
    pub fn target_shape(&self) -> RoundedRect {
        self.inner.animator.target()
    }

    /// Number of times layer contents were pushed (geometry or paint)
    pub fn render_revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of what should be drawn right now
    pub fn scene(&self) -> Scene {
        let state = self.state();
        let (ring, inner) = if self.laid_out {
            (
                Some(RingStroke {
                    rect: self.ring.rect,
                    line_width: self.ring.line_width,
                    color: self.ring.color,
                }),
                Some(InnerFill {
                    shape: self.inner.animator.presented(),
                    resting_kind: InnerShape::for_selection(state.is_selected),
                    color: self.inner.color,
                }),
            )
        } else {
            (None, None)
        };

        Scene {
            bounds: self.bounds,
            selected: state.is_selected,
            pressed: state.is_pressed,
            animating: self.is_animating(),
            ring,
            inner,
        }
    }

    // --- Internals ---

    fn handle_transition(&mut self, transition: Transition) {
        debug!(from = %transition.from, to = %transition.to, "record button transition");

        self.animate_inner();

        if transition.entered_press() {
            self.feedback.prepare();
            return;
        }

        if transition.selection_changed() {
            self.feedback.fire();
            self.notify(transition.to.is_selected);
        }

        if !transition.to.is_pressed {
            self.feedback.release();
        }
    }

    fn notify(&mut self, selected: bool) {
        for observer in self.observers.iter_mut() {
            observer(selected);
        }
    }

    fn inner_target(&self) -> RoundedRect {
        let state = self.state();
        if state.is_pressed {
            pressed_shape(self.bounds, &self.style, state.is_selected)
        } else {
            resting_shape(self.bounds, &self.style, state.is_selected)
        }
    }

    fn animate_inner(&mut self) {
        if !self.laid_out {
            return;
        }
        let target = self.inner_target();
        self.inner
            .animator
            .animate_to(target, self.style.transition());
        self.revision += 1;
    }

    /// Recompute ring and inner geometry and push it to the layers
    fn recompute_and_apply(&mut self) {
        self.revision += 1;

        if self.bounds.is_empty() {
            self.laid_out = false;
            self.inner.animator.snap_to(RoundedRect::default());
            trace!(bounds = ?self.bounds, "bounds empty, layers cleared");
            return;
        }

        self.ring.rect = outer_ring_rect(self.bounds, self.style.ring_width());
        self.ring.line_width = self.style.ring_width();

        let target = self.inner_target();
        if self.laid_out && self.inner.animator.is_animating() {
            self.inner.animator.retarget(target);
        } else {
            self.inner.animator.snap_to(target);
        }
        self.laid_out = true;

        trace!(
            bounds = ?self.bounds,
            ring = ?self.ring.rect,
            inner = ?target,
            "layers recomputed"
        );
    }
}

impl Default for RecordButton {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RecordButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordButton")
            .field("bounds", &self.bounds)
            .field("style", &self.style)
            .field("state", &self.state())
            .field("feedback", &self.feedback)
            .field("observers", &self.observers.len())
            .finish()
    }
}
