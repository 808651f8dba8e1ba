//! Cycle runner: wall-clock time → progress scalar for a single run.

use web_time::{Duration, Instant};

/// Total real-time length of one animation cycle.
pub const CYCLE_DURATION: Duration = Duration::from_millis(4000);

/// The progress scalar spans four unit-length phases.
pub const PROGRESS_SPAN: f32 = 4.0;

/// Maps elapsed wall-clock time onto the `[0, PROGRESS_SPAN]` progress
/// scalar for one run.
///
/// Progress is computed from elapsed time divided by [`CYCLE_DURATION`],
/// never from tick counts, so the cycle takes the same real time on a 30 Hz
/// host as on a 144 Hz one. The runner is the run handle: dropping it is
/// what guarantees a cancelled run can never advance again.
#[derive(Debug, Clone, Copy)]
pub struct CycleRunner {
    started_at: Instant,
}

impl CycleRunner {
    /// Start a run now.
    #[must_use]
    pub fn new() -> Self {
        Self::at(Instant::now())
    }

    /// Start a run at an explicit instant. Deterministic entry point for
    /// hosts and tests that drive their own clock.
    #[must_use]
    pub fn at(started_at: Instant) -> Self {
        Self { started_at }
    }

    /// Progress at `now`, clamped to `[0, PROGRESS_SPAN]`.
    ///
    /// An instant before the start maps to 0, so progress never decreases
    /// within a run on a monotonic clock.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let fraction = elapsed.as_secs_f32() / CYCLE_DURATION.as_secs_f32();
        (fraction * PROGRESS_SPAN).min(PROGRESS_SPAN)
    }

    /// Whether the run has reached the end of the cycle.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= PROGRESS_SPAN
    }
}

impl Default for CycleRunner {
    fn default() -> Self {
        Self::new()
    }
}
