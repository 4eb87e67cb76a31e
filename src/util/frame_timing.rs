//! Host-side frame timing helpers.

use web_time::{Duration, Instant};

/// Host-side frame clock with smoothed FPS readout.
///
/// Convenience for hosts whose frame source does not supply timestamps:
/// call [`FrameClock::tick`] once per frame and pass the returned timestamp
/// to [`Carousel::on_frame`](crate::engine::Carousel::on_frame).
pub struct FrameClock {
    /// Clock epoch; timestamps are measured from here.
    start: Instant,
    /// Last tick timestamp.
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock whose epoch is now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Record a frame boundary. Returns the monotonically increasing
    /// timestamp since the clock epoch.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        // Calculate instantaneous FPS
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        now.duration_since(self.start)
    }

    /// Get the current FPS (smoothed)
    #[inline]
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_are_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        std::thread::sleep(Duration::from_millis(2));
        let b = clock.tick();
        assert!(b > a);
    }

    #[test]
    fn test_fps_stays_positive() {
        let mut clock = FrameClock::new();
        for _ in 0..5 {
            std::thread::sleep(Duration::from_millis(1));
            let _ = clock.tick();
        }
        assert!(clock.fps() > 0.0);
    }
}
