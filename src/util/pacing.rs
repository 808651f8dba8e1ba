//! Redraw-cadence helper for hosts that cap their frame rate.

use web_time::{Duration, Instant};

use crate::options::PacingOptions;

/// Frame pacing with FPS measurement and an optional tick-rate cap.
///
/// The indicator itself is frame-rate independent, so pacing is purely a
/// host economy measure: hosts that do not want to repaint at their native
/// refresh rate ask the pacer whether enough time has passed. All methods
/// take an explicit `now` so the pacer shares the host's frame clock with
/// [`LoadingIndicator::tick`](crate::LoadingIndicator::tick).
#[derive(Debug)]
pub struct FramePacer {
    /// Minimum interval between ticks; zero means uncapped.
    min_interval: Duration,
    /// Timestamp of the last accepted tick.
    last_tick: Instant,
    /// Smoothed ticks-per-second using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother display).
    smoothing: f32,
}

impl FramePacer {
    /// Build a pacer from host options, anchored at `now`.
    #[must_use]
    pub fn new(options: &PacingOptions, now: Instant) -> Self {
        let min_interval = if options.target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(options.target_fps))
        } else {
            Duration::ZERO
        };
        Self {
            min_interval,
            last_tick: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last accepted tick.
    /// Always true when uncapped.
    #[must_use]
    pub fn due(&self, now: Instant) -> bool {
        if self.min_interval.is_zero() {
            return true;
        }
        now.saturating_duration_since(self.last_tick) >= self.min_interval
    }

    /// Record an accepted tick and fold it into the FPS estimate.
    pub fn mark(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Smoothed ticks-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pacer(target_fps: u32, now: Instant) -> FramePacer {
        FramePacer::new(&PacingOptions { target_fps }, now)
    }

    #[test]
    fn uncapped_is_always_due() {
        let t0 = Instant::now();
        let p = pacer(0, t0);
        assert!(p.due(t0));
        assert!(p.due(t0 + Duration::from_nanos(1)));
    }

    #[test]
    fn cap_enforces_the_minimum_interval() {
        let t0 = Instant::now();
        let mut p = pacer(50, t0); // 20ms interval

        assert!(!p.due(t0 + Duration::from_millis(10)));
        assert!(p.due(t0 + Duration::from_millis(20)));

        p.mark(t0 + Duration::from_millis(20));
        assert!(!p.due(t0 + Duration::from_millis(30)));
        assert!(p.due(t0 + Duration::from_millis(40)));
    }

    #[test]
    fn fps_estimate_converges_to_the_tick_rate() {
        let t0 = Instant::now();
        let mut p = pacer(0, t0);
        // 100 ticks at a steady 10ms cadence (100 fps).
        let mut now = t0;
        for _ in 0..100 {
            now += Duration::from_millis(10);
            p.mark(now);
        }
        assert!((p.fps() - 100.0).abs() < 5.0);
    }

    #[test]
    fn zero_elapsed_ticks_do_not_poison_the_estimate() {
        let t0 = Instant::now();
        let mut p = pacer(0, t0);
        p.mark(t0);
        assert!(p.fps().is_finite());
    }
}
