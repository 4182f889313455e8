//! Inner-shape animation timeline
//!
//! The host advances the timeline with [`ShapeAnimator::advance`]. A new
//! animation always starts from the currently presented shape and replaces
//! the one in flight, so the latest requested target is the one that sticks.

use std::time::Duration;

use crate::domain::geometry::RoundedRect;

/// Timing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `0.0..=1.0` onto the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: RoundedRect,
    to: RoundedRect,
    elapsed: Duration,
    duration: Duration,
}

impl Tween {
    fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }
}

/// Animates the inner shape between rounded rects
#[derive(Debug, Clone)]
pub struct ShapeAnimator {
    presented: RoundedRect,
    tween: Option<Tween>,
    easing: Easing,
}

impl ShapeAnimator {
    pub fn new(initial: RoundedRect) -> Self {
        Self {
            presented: initial,
            tween: None,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Shape currently on screen
    pub fn presented(&self) -> RoundedRect {
        self.presented
    }

    /// Shape the animator settles on once idle
    pub fn target(&self) -> RoundedRect {
        self.tween.map_or(self.presented, |tween| tween.to)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Start animating towards `target`, superseding any animation in flight.
    /// A zero duration applies the target immediately.
    pub fn animate_to(&mut self, target: RoundedRect, duration: Duration) {
        if duration.is_zero() || target == self.presented {
            self.snap_to(target);
            return;
        }
        self.tween = Some(Tween {
            from: self.presented,
            to: target,
            elapsed: Duration::ZERO,
            duration,
        });
    }

    /// Redirect the running animation to `target` from the presented shape,
    /// finishing in the time it had left. Without a running animation this snaps.
    pub fn retarget(&mut self, target: RoundedRect) {
        match self.tween.as_mut() {
            Some(tween) => {
                tween.from = self.presented;
                tween.to = target;
                tween.duration = tween.duration.saturating_sub(tween.elapsed);
                tween.elapsed = Duration::ZERO;
            }
            None => self.snap_to(target),
        }
    }

    /// Cancel any animation and present `target`
    pub fn snap_to(&mut self, target: RoundedRect) {
        self.tween = None;
        self.presented = target;
    }

    /// Step the timeline. Returns true while an animation is still running.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };

        tween.elapsed = tween.elapsed.saturating_add(dt);
        if tween.elapsed >= tween.duration {
            self.presented = tween.to;
            self.tween = None;
            return false;
        }

        let t = self.easing.apply(tween.progress());
        self.presented = tween.from.lerp(&tween.to, t);
        true
    }
}

impl Default for ShapeAnimator {
    fn default() -> Self {
        Self::new(RoundedRect::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::Rect;

    fn circle() -> RoundedRect {
        RoundedRect::new(Rect::new(8.0, 8.0, 84.0, 84.0), 42.0)
    }

    fn square() -> RoundedRect {
        RoundedRect::new(Rect::new(24.0, 24.0, 52.0, 52.0), 6.76)
    }

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
        assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    }

    #[test]
    fn animation_reaches_target_and_sticks() {
        let mut animator = ShapeAnimator::new(circle());
        animator.animate_to(square(), MS_100);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), square());

        assert!(animator.advance(Duration::from_millis(50)));
        assert_ne!(animator.presented(), circle());
        assert_ne!(animator.presented(), square());

        assert!(!animator.advance(Duration::from_millis(60)));
        assert_eq!(animator.presented(), square());

        // Stays at the end value
        assert!(!animator.advance(MS_100));
        assert_eq!(animator.presented(), square());
    }

    #[test]
    fn linear_midpoint() {
        let mut animator = ShapeAnimator::new(circle()).with_easing(Easing::Linear);
        animator.animate_to(square(), MS_100);
        animator.advance(Duration::from_millis(50));
        assert_eq!(animator.presented(), circle().lerp(&square(), 0.5));
    }

    #[test]
    fn zero_duration_snaps() {
        let mut animator = ShapeAnimator::new(circle());
        animator.animate_to(square(), Duration::ZERO);
        assert!(!animator.is_animating());
        assert_eq!(animator.presented(), square());
    }

    #[test]
    fn new_animation_starts_from_presented_value() {
        let mut animator = ShapeAnimator::new(circle()).with_easing(Easing::Linear);
        animator.animate_to(square(), MS_100);
        animator.advance(Duration::from_millis(40));
        let mid = animator.presented();

        animator.animate_to(circle(), MS_100);
        // No jump when superseding
        assert_eq!(animator.presented(), mid);
        assert_eq!(animator.target(), circle());

        animator.advance(MS_100);
        assert_eq!(animator.presented(), circle());
    }

    #[test]
    fn retarget_continues_from_presented_shape() {
        let mut animator = ShapeAnimator::new(circle()).with_easing(Easing::Linear);
        animator.animate_to(square(), MS_100);
        animator.advance(Duration::from_millis(50));
        let mid = animator.presented();

        let moved = RoundedRect::new(Rect::new(20.0, 20.0, 60.0, 60.0), 7.8);
        animator.retarget(moved);
        assert!(animator.is_animating());
        assert_eq!(animator.presented(), mid);
        assert_eq!(animator.target(), moved);

        assert!(animator.advance(Duration::from_millis(25)));
        assert_eq!(animator.presented(), mid.lerp(&moved, 0.5));

        // Finishes in the time that was left
        assert!(!animator.advance(Duration::from_millis(25)));
        assert_eq!(animator.presented(), moved);
    }

    #[test]
    fn retarget_without_animation_snaps() {
        let mut animator = ShapeAnimator::new(circle());
        animator.retarget(square());
        assert!(!animator.is_animating());
        assert_eq!(animator.presented(), square());
    }

    #[test]
    fn advance_when_idle_is_noop() {
        let mut animator = ShapeAnimator::new(circle());
        assert!(!animator.advance(MS_100));
        assert_eq!(animator.presented(), circle());
    }
}
