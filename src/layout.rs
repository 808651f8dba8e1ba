//! Layout metrics derived from the host's drawable bounds.

use glam::Vec2;

/// Static geometry constants computed once per layout change.
///
/// Everything the phase formulas and the resolver need is derived here from
/// the drawable width/height, so a layout change is a single recomputation
/// and the per-tick path does no redundant square roots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Drawable width in pixels.
    pub width: f32,
    /// Drawable height in pixels.
    pub height: f32,
    /// Center of the drawable area, `(width / 2, height / 2)`.
    pub center: Vec2,
    /// Half the bounding diagonal, `sqrt((w/2)^2 + (h/2)^2)`.
    pub half_diagonal: f32,
    /// Radius of each orbiting dot, `width / 32`.
    pub dot_radius: f32,
}

impl LayoutMetrics {
    /// Derive metrics from the drawable bounds.
    ///
    /// Callers are expected to pass positive, finite dimensions; see
    /// [`LoadingIndicator::on_layout_changed`](crate::LoadingIndicator::on_layout_changed)
    /// for the guarded entry point.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let center = Vec2::new(width / 2.0, height / 2.0);
        Self {
            width,
            height,
            center,
            half_diagonal: center.length(),
            dot_radius: width / 32.0,
        }
    }
}
