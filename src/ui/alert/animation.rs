// SPDX-License-Identifier: MPL-2.0
//! Retargetable scalar animation.
//!
//! An [`AnimatedScalar`] moves toward its target either over a fixed
//! duration (cubic ease-in-out) or along an underdamped spring that settles
//! by amplitude decay. Values are sampled with an explicit `Instant`, so the
//! surrounding state machine stays deterministic under test.
//!
//! Retargeting mid-flight is allowed and expected: the scalar restarts from
//! its current sampled value, never snapping.

use std::time::{Duration, Instant};

// Unit mass, stiffness 100, damping 10: underdamped (ζ = 0.5), which gives
// the entry its slight bounce.
const SPRING_STIFFNESS: f32 = 100.0;
const SPRING_DAMPING: f32 = 10.0;

/// Amplitude envelope below which a spring counts as settled, in the
/// scalar's own unit (logical pixels for offsets).
const SPRING_REST_EPSILON: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Curve {
    /// Cubic ease-in-out over a fixed duration.
    Timed(Duration),
    /// Underdamped spring; no fixed duration.
    Spring,
}

#[derive(Debug, Clone)]
pub struct AnimatedScalar {
    start: f32,
    target: f32,
    /// `None` while resting on the target.
    started_at: Option<Instant>,
    curve: Curve,
}

impl AnimatedScalar {
    /// A scalar at rest on `value`.
    #[must_use]
    pub fn resting(value: f32) -> Self {
        Self {
            start: value,
            target: value,
            started_at: None,
            curve: Curve::Timed(Duration::ZERO),
        }
    }

    /// Current target, regardless of whether it has been reached.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Starts a timed animation toward `target` from the currently sampled
    /// value.
    pub fn animate_to(&mut self, target: f32, duration: Duration, now: Instant) {
        self.start = self.value_at(now);
        self.target = target;
        self.started_at = Some(now);
        self.curve = Curve::Timed(duration);
    }

    /// Starts a spring toward `target` from the currently sampled value.
    pub fn spring_to(&mut self, target: f32, now: Instant) {
        self.start = self.value_at(now);
        self.target = target;
        self.started_at = Some(now);
        self.curve = Curve::Spring;
    }

    /// Moves to `value` immediately, without animating. Used while a drag
    /// drives the scalar directly.
    pub fn snap_to(&mut self, value: f32) {
        self.start = value;
        self.target = value;
        self.started_at = None;
    }

    /// Samples the scalar at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.target;
        };
        if self.is_settled(now) {
            return self.target;
        }
        let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
        let delta = self.start - self.target;

        match self.curve {
            Curve::Timed(duration) => {
                let t = (elapsed / duration.as_secs_f32()).min(1.0);
                self.target + delta * (1.0 - ease_in_out_cubic(t))
            }
            Curve::Spring => {
                let omega = SPRING_STIFFNESS.sqrt();
                let zeta = SPRING_DAMPING / (2.0 * omega);
                let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                let decay = (-zeta * omega * elapsed).exp();
                let oscillation = (omega_d * elapsed).cos()
                    + (zeta * omega / omega_d) * (omega_d * elapsed).sin();
                self.target + delta * decay * oscillation
            }
        }
    }

    /// Whether the animation has converged on its target.
    ///
    /// Timed curves settle exactly at their duration; springs settle when
    /// their amplitude envelope decays below a rest epsilon.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return true;
        };
        let elapsed = now.saturating_duration_since(started_at);

        match self.curve {
            Curve::Timed(duration) => elapsed >= duration,
            Curve::Spring => {
                let omega = SPRING_STIFFNESS.sqrt();
                let zeta = SPRING_DAMPING / (2.0 * omega);
                let envelope =
                    (self.start - self.target).abs() * (-zeta * omega * elapsed.as_secs_f32()).exp();
                envelope < SPRING_REST_EPSILON
            }
        }
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn resting_scalar_is_settled_on_its_value() {
        let scalar = AnimatedScalar::resting(5.0);
        let now = Instant::now();
        assert!(scalar.is_settled(now));
        assert_abs_diff_eq!(scalar.value_at(now), 5.0);
    }

    #[test]
    fn timed_animation_hits_endpoints_exactly() {
        let t0 = Instant::now();
        let mut scalar = AnimatedScalar::resting(0.0);
        scalar.animate_to(1.0, Duration::from_millis(300), t0);

        assert_abs_diff_eq!(scalar.value_at(t0), 0.0);
        assert!(!scalar.is_settled(t0));

        let t_end = t0 + Duration::from_millis(300);
        assert_abs_diff_eq!(scalar.value_at(t_end), 1.0);
        assert!(scalar.is_settled(t_end));

        // Past the duration the value stays pinned on the target
        assert_abs_diff_eq!(scalar.value_at(t_end + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn timed_animation_progresses_between_endpoints() {
        let t0 = Instant::now();
        let mut scalar = AnimatedScalar::resting(0.0);
        scalar.animate_to(1.0, Duration::from_millis(300), t0);

        let quarter = scalar.value_at(t0 + Duration::from_millis(75));
        let half = scalar.value_at(t0 + Duration::from_millis(150));
        let three_quarters = scalar.value_at(t0 + Duration::from_millis(225));

        assert!(quarter > 0.0 && quarter < half);
        assert_abs_diff_eq!(half, 0.5, epsilon = 1e-4);
        assert!(three_quarters > half && three_quarters < 1.0);
    }

    #[test]
    fn retarget_restarts_from_current_value() {
        let t0 = Instant::now();
        let mut scalar = AnimatedScalar::resting(0.0);
        scalar.animate_to(1.0, Duration::from_millis(300), t0);

        let midway = t0 + Duration::from_millis(150);
        let value_at_midway = scalar.value_at(midway);
        scalar.animate_to(0.0, Duration::from_millis(300), midway);

        // No snap: the new animation starts where the old one was
        assert_abs_diff_eq!(scalar.value_at(midway), value_at_midway, epsilon = 1e-5);
        assert_abs_diff_eq!(
            scalar.value_at(midway + Duration::from_millis(300)),
            0.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn spring_converges_and_settles() {
        let t0 = Instant::now();
        let mut scalar = AnimatedScalar::resting(-50.0);
        scalar.spring_to(0.0, t0);

        assert_abs_diff_eq!(scalar.value_at(t0), -50.0, epsilon = 1e-3);
        assert!(!scalar.is_settled(t0));

        // Well past the decay envelope the spring reads exactly the target
        let later = t0 + Duration::from_secs(3);
        assert!(scalar.is_settled(later));
        assert_abs_diff_eq!(scalar.value_at(later), 0.0);
    }

    #[test]
    fn spring_overshoots_its_target_once() {
        // Underdamped springs must cross the target before settling
        let t0 = Instant::now();
        let mut scalar = AnimatedScalar::resting(-50.0);
        scalar.spring_to(0.0, t0);

        let mut overshot = false;
        for ms in (0..1500).step_by(16) {
            if scalar.value_at(t0 + Duration::from_millis(ms)) > 0.0 {
                overshot = true;
                break;
            }
        }
        assert!(overshot);
    }

    #[test]
    fn snap_moves_immediately() {
        let t0 = Instant::now();
        let mut scalar = AnimatedScalar::resting(0.0);
        scalar.animate_to(1.0, Duration::from_millis(300), t0);

        scalar.snap_to(42.0);
        assert!(scalar.is_settled(t0));
        assert_abs_diff_eq!(scalar.value_at(t0), 42.0);
    }

    #[test]
    fn zero_duration_animation_is_immediately_settled() {
        let t0 = Instant::now();
        let mut scalar = AnimatedScalar::resting(0.0);
        scalar.animate_to(1.0, Duration::ZERO, t0);
        assert!(scalar.is_settled(t0));
        assert_abs_diff_eq!(scalar.value_at(t0), 1.0);
    }
}
