//! The four-phase formula table mapping progress onto geometry.
//!
//! One cycle sweeps the progress scalar from 0 to 4; each unit interval is
//! its own phase with its own formulas:
//!
//! 1. **Sweep** - the dots make one full clockwise revolution at the
//!    baseline orbit radius.
//! 2. **Widen** - rotation holds while the orbit radius grows from
//!    `width/4` to `3·width/8`.
//! 3. **Gather** - a second revolution while the orbit collapses to the
//!    center.
//! 4. **Scatter** - the dots unwind two turns and fly out past the bounds
//!    while the ring thins to nothing.
//!
//! # Invariants
//!
//! 1. Each phase assigns only the fields it defines; everything else
//!    carries over from the previous tick via [`AnimationState`].
//! 2. Phase selection uses strict `>` comparisons in descending order, so
//!    a progress of exactly 1, 2, or 3 still evaluates the earlier phase's
//!    formulas. The carry-over at those instants is load-bearing for
//!    rendered output - keep the asymmetry.
//! 3. Orbit radius and ring stroke width stay non-negative for all
//!    progress values in `[0, 4]`.

use std::f32::consts::TAU;

use super::state::AnimationState;
use crate::layout::LayoutMetrics;

/// The four unit-length sub-intervals of the progress scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `[0, 1]`: one revolution at the baseline orbit radius.
    Sweep,
    /// `(1, 2]`: orbit radius grows, rotation holds.
    Widen,
    /// `(2, 3]`: second revolution while the orbit collapses.
    Gather,
    /// `(3, 4]`: ring thins out, dots unwind and scatter outward.
    Scatter,
}

impl Phase {
    /// Select the phase for a progress value.
    ///
    /// Strict comparisons, highest boundary first: exact boundary values
    /// (1, 2, 3) land in the lower phase.
    #[must_use]
    pub fn of(progress: f32) -> Self {
        if progress > 3.0 {
            Self::Scatter
        } else if progress > 2.0 {
            Self::Gather
        } else if progress > 1.0 {
            Self::Widen
        } else {
            Self::Sweep
        }
    }

    /// Progress local to this phase, `progress - offset`.
    ///
    /// In `(0, 1]` for Widen/Gather/Scatter; Sweep spans `[0, 1]` because
    /// of the boundary tie-break.
    #[must_use]
    pub fn local(self, progress: f32) -> f32 {
        match self {
            Self::Sweep => progress,
            Self::Widen => progress - 1.0,
            Self::Gather => progress - 2.0,
            Self::Scatter => progress - 3.0,
        }
    }
}

/// Advance the state to `progress`, applying the current phase's formulas.
///
/// Only the fields the phase defines are written; the rest keep their
/// previous values. Called once per tick from the driver.
pub fn advance(
    state: &mut AnimationState,
    metrics: &LayoutMetrics,
    progress: f32,
) {
    state.progress = progress;
    let phase = Phase::of(progress);
    let t = phase.local(progress);
    match phase {
        Phase::Sweep => {
            state.angle = t * TAU;
        }
        Phase::Widen => {
            state.orbit_radius = (metrics.width / 4.0) * (1.0 + t / 2.0);
        }
        Phase::Gather => {
            state.angle = (1.0 + t) * TAU;
            state.orbit_radius = (3.0 * metrics.width / 8.0) * (1.0 - t);
        }
        Phase::Scatter => {
            let stroke = metrics.half_diagonal * (1.0 - t);
            state.ring_stroke_width = stroke;
            state.ring_radius = stroke / 2.0 + (metrics.half_diagonal - stroke);
            state.angle = (1.0 - t) * 2.0 * TAU;
            state.orbit_radius = metrics.half_diagonal * (t * 1.25);
        }
    }
}
