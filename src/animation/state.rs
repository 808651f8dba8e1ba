//! Mutable animation state owned by the driver.

use crate::layout::LayoutMetrics;

/// Snapshot of the driving values behind one rendered frame.
///
/// Owned exclusively by [`LoadingIndicator`](crate::LoadingIndicator) and
/// mutated only from its tick path. Fields a phase does not define persist
/// from the previous tick - that carry-over is part of the contract, not an
/// accident (see [`phase::advance`](super::phase::advance)).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Overall progress scalar in `[0, 4]`; one unit per phase.
    pub progress: f32,
    /// Shared rotation angle in radians. Zero points straight up from the
    /// center; positive values rotate clockwise.
    pub angle: f32,
    /// Distance from the center to each dot.
    pub orbit_radius: f32,
    /// Ring radius, measured to the middle of the stroke.
    pub ring_radius: f32,
    /// Ring stroke width.
    pub ring_stroke_width: f32,
}

impl AnimationState {
    /// The reset state every run starts from (and `cancel` returns to):
    /// angle 0, orbit radius `width / 4`, ring stroke spanning the full
    /// half-diagonal, ring radius at half of it.
    #[must_use]
    pub fn baseline(metrics: &LayoutMetrics) -> Self {
        Self {
            progress: 0.0,
            angle: 0.0,
            orbit_radius: metrics.width / 4.0,
            ring_radius: metrics.half_diagonal / 2.0,
            ring_stroke_width: metrics.half_diagonal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_values() {
        let metrics = LayoutMetrics::new(320.0, 320.0);
        let state = AnimationState::baseline(&metrics);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.angle, 0.0);
        assert_eq!(state.orbit_radius, 80.0);
        assert!((state.ring_radius - metrics.half_diagonal / 2.0).abs() < 1e-4);
        assert!((state.ring_stroke_width - metrics.half_diagonal).abs() < 1e-4);
    }

    #[test]
    fn baseline_scales_with_width() {
        let metrics = LayoutMetrics::new(640.0, 320.0);
        let state = AnimationState::baseline(&metrics);
        assert_eq!(state.orbit_radius, 160.0);
    }
}
