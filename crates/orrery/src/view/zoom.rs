// view/zoom.rs
//
// Camera-distance interpolation. Pure math plus a small transition driver
// ticked from the frame loop.

use serde::{Deserialize, Serialize};

/// Easing curve for zoom transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomEasing {
    /// Constant velocity.
    Linear,
    /// Slow start and end.
    #[default]
    EaseInOut,
    /// Slow end.
    EaseOut,
}

impl ZoomEasing {
    /// Apply the curve to `t`, clamped to [0, 1].
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            ZoomEasing::Linear => t,
            ZoomEasing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            ZoomEasing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Camera distance `progress` of the way from `start` to `end`.
#[inline]
pub fn interpolate_zoom(start: f64, end: f64, progress: f64, easing: ZoomEasing) -> f64 {
    start + (end - start) * easing.apply(progress)
}

/// A running zoom from one camera distance to another.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomTransition {
    pub start: f64,
    pub end: f64,
    /// Duration in seconds.
    pub duration: f64,
    pub elapsed: f64,
    pub easing: ZoomEasing,
}

impl ZoomTransition {
    pub fn new(start: f64, end: f64, duration: f64, easing: ZoomEasing) -> Self {
        Self { start, end, duration, elapsed: 0.0, easing }
    }

    /// Advance by `dt` seconds and return the current distance.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f64 {
        if self.duration <= 0.0 {
            return self.end;
        }
        interpolate_zoom(self.start, self.end, self.elapsed / self.duration, self.easing)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [ZoomEasing::Linear, ZoomEasing::EaseInOut, ZoomEasing::EaseOut] {
            assert_eq!(interpolate_zoom(10.0, 500.0, 0.0, easing), 10.0);
            assert_eq!(interpolate_zoom(10.0, 500.0, 1.0, easing), 500.0);
        }
    }

    #[test]
    fn curves_at_midpoint() {
        assert_eq!(ZoomEasing::Linear.apply(0.25), 0.25);
        assert_eq!(ZoomEasing::EaseInOut.apply(0.25), 0.125);
        assert_eq!(ZoomEasing::EaseInOut.apply(0.5), 0.5);
        assert_eq!(ZoomEasing::EaseOut.apply(0.5), 0.75);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(interpolate_zoom(0.0, 100.0, 1.5, ZoomEasing::Linear), 100.0);
        assert_eq!(interpolate_zoom(0.0, 100.0, -1.0, ZoomEasing::EaseOut), 0.0);
    }

    #[test]
    fn transition_runs_to_completion() {
        let mut zoom = ZoomTransition::new(100.0, 1000.0, 2.0, ZoomEasing::Linear);
        assert_eq!(zoom.advance(1.0), 550.0);
        assert!(!zoom.is_finished());
        assert_eq!(zoom.advance(5.0), 1000.0);
        assert!(zoom.is_finished());
    }

    #[test]
    fn zero_duration_jumps() {
        let zoom = ZoomTransition::new(1.0, 2.0, 0.0, ZoomEasing::EaseInOut);
        assert_eq!(zoom.value(), 2.0);
        assert!(zoom.is_finished());
    }
}
