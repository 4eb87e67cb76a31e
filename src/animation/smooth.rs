//! Frame-rate-independent exponential smoothing channel.
//!
//! A [`Smoothed`] channel moves a scalar toward a (possibly time-varying)
//! target by a fixed fraction of the remaining distance each nominal frame,
//! snapping to the target once within a stop threshold so motion settles
//! to an exact value instead of approaching it asymptotically forever.

/// Result of one smoothing step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothStep {
    /// The updated channel value.
    pub value: f32,
    /// Whether the value has converged to (snapped onto) the target.
    pub done: bool,
}

/// Stateful exponential-approach filter ("critically damped lerp").
///
/// The `frames` argument of [`Smoothed::step`] compensates for variable time
/// between animation callbacks, so perceived speed is constant regardless of
/// actual frame rate.
///
/// # Preconditions
///
/// `smooth_factor` must be nonzero (its reciprocal is the per-frame approach
/// fraction). Callers should keep `frames` small relative to
/// `smooth_factor`; the approach is monotonic only while a single step does
/// not overshoot the target.
#[derive(Debug, Clone, Copy)]
pub struct Smoothed {
    previous: f32,
    multiplier: f32,
    stop_threshold: f32,
}

impl Smoothed {
    /// Create a channel seeded at `initial`.
    #[must_use]
    pub fn new(initial: f32, smooth_factor: f32, stop_threshold: f32) -> Self {
        Self {
            previous: initial,
            multiplier: 1.0 / smooth_factor,
            stop_threshold,
        }
    }

    /// Advance the channel toward `target` by `frames` nominal frames.
    ///
    /// `frames == 0.0` yields no movement. Once the candidate value is
    /// within `stop_threshold` of the target it snaps to the target exactly,
    /// and `done` reports `true`.
    pub fn step(&mut self, target: f32, frames: f32) -> SmoothStep {
        let delta = (target - self.previous) * frames;
        let mut value = self.previous + delta * self.multiplier;
        if (target - value).abs() <= self.stop_threshold {
            value = target;
        }
        self.previous = value;
        SmoothStep {
            value,
            done: value == target,
        }
    }

    /// The value produced by the most recent step (or the seed).
    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_to_exact_target() {
        let mut channel = Smoothed::new(0.0, 20.0, 0.1);
        let mut done = false;
        for _ in 0..1000 {
            if channel.step(100.0, 1.0).done {
                done = true;
                break;
            }
        }
        assert!(done);
        assert_eq!(channel.value(), 100.0);
    }

    #[test]
    fn test_converges_from_any_start() {
        for start in [-5000.0, -1.0, 0.0, 3.7, 9999.0] {
            let mut channel = Smoothed::new(start, 15.0, 1e-4);
            let mut done = false;
            for _ in 0..5000 {
                let step = channel.step(1.0, 1.0);
                if step.done {
                    assert_eq!(step.value, 1.0);
                    done = true;
                    break;
                }
            }
            assert!(done, "no convergence from {start}");
        }
    }

    #[test]
    fn test_zero_frames_yields_no_movement() {
        let mut channel = Smoothed::new(10.0, 20.0, 0.1);
        let step = channel.step(500.0, 0.0);
        assert_eq!(step.value, 10.0);
        assert!(!step.done);
    }

    #[test]
    fn test_stays_on_target_once_done() {
        let mut channel = Smoothed::new(42.0, 20.0, 0.1);
        let step = channel.step(42.0, 1.0);
        assert!(step.done);
        let step = channel.step(42.0, 1.0);
        assert!(step.done);
        assert_eq!(step.value, 42.0);
    }

    #[test]
    fn test_double_frame_at_least_as_close_as_two_singles() {
        // One step with frames=2 must land at least as close to the target
        // as two steps with frames=1, without overshooting.
        let target = 100.0;

        let mut doubled = Smoothed::new(0.0, 20.0, 1e-6);
        let coarse = doubled.step(target, 2.0).value;

        let mut single = Smoothed::new(0.0, 20.0, 1e-6);
        let _ = single.step(target, 1.0);
        let fine = single.step(target, 1.0).value;

        assert!(coarse <= target);
        assert!(
            (target - coarse) <= (target - fine) + 1e-4,
            "coarse {coarse} further from target than fine {fine}"
        );
    }

    #[test]
    fn test_monotonic_approach() {
        let mut channel = Smoothed::new(-20.0, 40.0, 1e-4);
        let mut prev = channel.value();
        for _ in 0..200 {
            let step = channel.step(30.0, 1.0);
            assert!(step.value >= prev, "{} < {prev}", step.value);
            assert!(step.value <= 30.0);
            prev = step.value;
        }
    }

    #[test]
    fn test_tracks_moving_target() {
        let mut channel = Smoothed::new(0.0, 10.0, 1e-3);
        let _ = channel.step(10.0, 1.0);
        // Retargeting mid-flight approaches the new target from the
        // current value, not the seed.
        let step = channel.step(-10.0, 1.0);
        assert!(step.value < 1.0);
        assert!(step.value > -10.0);
    }
}
