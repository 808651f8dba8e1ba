//! The indicator facade: lifecycle, run ownership, and host notifications.

use web_time::Instant;

use crate::animation::{phase, AnimationState, CycleRunner, PROGRESS_SPAN};
use crate::frame::Frame;
use crate::layout::LayoutMetrics;
use crate::resolver;

type RedrawListener = Box<dyn FnMut(&Frame)>;
type EndListener = Box<dyn FnMut()>;

/// Animation driver for the orbiting-dots loading indicator.
///
/// Owns the layout metrics, the mutable [`AnimationState`], the run handle,
/// and the two host subscriptions. Everything runs on the host's UI/render
/// thread; the host supplies the frame clock by calling [`tick`](Self::tick)
/// once per frame.
///
/// ```
/// use web_time::Instant;
/// use whorl::LoadingIndicator;
///
/// let mut indicator = LoadingIndicator::new();
/// indicator.set_redraw_listener(|frame| {
///     // hand the frame to the paint routine
///     let _ = frame.ring.radius;
/// });
/// indicator.on_layout_changed(320.0, 320.0);
/// indicator.start();
/// indicator.tick(Instant::now());
/// ```
#[derive(Default)]
pub struct LoadingIndicator {
    metrics: Option<LayoutMetrics>,
    state: AnimationState,
    runner: Option<CycleRunner>,
    on_redraw: Option<RedrawListener>,
    on_ended: Option<EndListener>,
}

impl LoadingIndicator {
    /// Create an idle indicator with no layout metrics yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to per-frame redraw requests.
    ///
    /// Single slot: replacing a subscription silently drops the previous
    /// one. The listener receives the freshly resolved [`Frame`] for the
    /// baseline redraw on `start` and once per subsequent tick.
    pub fn set_redraw_listener(
        &mut self,
        listener: impl FnMut(&Frame) + 'static,
    ) {
        self.on_redraw = Some(Box::new(listener));
    }

    /// Subscribe to the animation-ended notification.
    ///
    /// Single slot, same replacement semantics as
    /// [`set_redraw_listener`](Self::set_redraw_listener). Fires on natural
    /// completion and on every [`cancel`](Self::cancel) call.
    pub fn set_end_listener(&mut self, listener: impl FnMut() + 'static) {
        self.on_ended = Some(Box::new(listener));
    }

    /// Host lifecycle: the drawable bounds became known or changed.
    ///
    /// Recomputes [`LayoutMetrics`] and resets the state to the new
    /// baseline. An in-flight run keeps running; its next tick rebuilds the
    /// geometry from the new metrics. Non-positive or non-finite dimensions
    /// are rejected and the previous metrics kept.
    pub fn on_layout_changed(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite())
            || width <= 0.0
            || height <= 0.0
        {
            log::warn!("rejecting degenerate layout {width}x{height}");
            return;
        }
        let metrics = LayoutMetrics::new(width, height);
        self.state = AnimationState::baseline(&metrics);
        self.metrics = Some(metrics);
    }

    /// Begin a run from the baseline.
    ///
    /// Any in-flight run is cancelled first (reset + ended notification),
    /// then the state returns to baseline and a fresh run starts. Triggers
    /// the baseline redraw synchronously. Before layout metrics exist this
    /// is a guarded no-op.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Host frame clock: advance to `now`.
    ///
    /// No-op while idle or before layout. Otherwise applies the phase
    /// formulas for the current progress, requests a redraw, and on
    /// reaching the end of the cycle releases the run and fires the ended
    /// notification. The state is left at the cycle-end values - only
    /// `start` and `cancel` reset it.
    pub fn tick(&mut self, now: Instant) {
        let Some(metrics) = self.metrics else { return };
        let Some(progress) = self.runner.as_ref().map(|r| r.progress(now))
        else {
            return;
        };
        phase::advance(&mut self.state, &metrics, progress);
        log::trace!("tick progress={progress:.3}");
        self.request_redraw();
        if progress >= PROGRESS_SPAN {
            self.runner = None;
            log::debug!("animation finished");
            self.notify_ended();
        }
    }

    /// Stop any in-flight run and return to the baseline.
    ///
    /// Synchronous and idempotent in state: a second call leaves the same
    /// state as the first. The ended notification fires on every call,
    /// idle or not. Releasing the run handle guarantees no later tick can
    /// advance stale state or duplicate the notification.
    pub fn cancel(&mut self) {
        self.runner = None;
        if let Some(metrics) = self.metrics {
            self.state = AnimationState::baseline(&metrics);
        }
        log::debug!("animation cancelled");
        self.notify_ended();
    }

    /// Host lifecycle: tear down.
    ///
    /// Releases the run handle and both subscriptions without firing any
    /// notification. The indicator can be relaid-out and restarted
    /// afterwards.
    pub fn dispose(&mut self) {
        self.runner = None;
        self.on_redraw = None;
        self.on_ended = None;
    }

    /// Whether a run is currently in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.runner.is_some()
    }

    /// Current animation state.
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Current layout metrics, if the host has supplied bounds.
    #[must_use]
    pub fn metrics(&self) -> Option<&LayoutMetrics> {
        self.metrics.as_ref()
    }

    /// Resolve the current state into a frame, for hosts that poll instead
    /// of subscribing. `None` before layout.
    #[must_use]
    pub fn frame(&self) -> Option<Frame> {
        self.metrics
            .as_ref()
            .map(|m| resolver::resolve(&self.state, m))
    }

    fn start_at(&mut self, now: Instant) {
        let Some(metrics) = self.metrics else {
            log::warn!("start() before layout metrics are known; ignoring");
            return;
        };
        if self.runner.is_some() {
            // Reentrant start: cancel-then-restart, never queue.
            self.cancel();
        }
        self.state = AnimationState::baseline(&metrics);
        self.runner = Some(CycleRunner::at(now));
        log::debug!("animation started");
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        let Some(metrics) = self.metrics else { return };
        if let Some(listener) = self.on_redraw.as_mut() {
            let frame = resolver::resolve(&self.state, &metrics);
            listener(&frame);
        }
    }

    fn notify_ended(&mut self) {
        if let Some(listener) = self.on_ended.as_mut() {
            listener();
        }
    }
}

impl std::fmt::Debug for LoadingIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingIndicator")
            .field("metrics", &self.metrics)
            .field("state", &self.state)
            .field("running", &self.runner.is_some())
            .field("has_redraw_listener", &self.on_redraw.is_some())
            .field("has_end_listener", &self.on_ended.is_some())
            .finish()
    }
}
