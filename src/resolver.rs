//! Pure resolution of animation state into a renderable frame.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::animation::AnimationState;
use crate::frame::{Dot, Frame, Ring};
use crate::layout::LayoutMetrics;
use crate::palette::{DOT_COLORS, DOT_COUNT, RING_COLOR};

/// Angular spacing between adjacent dots (60°).
const SLOT_SPACING: f32 = TAU / DOT_COUNT as f32;

/// Resolve the current state into a frame.
///
/// Stateless and deterministic: the same `(state, metrics)` pair always
/// yields the same frame. All trigonometry in the crate lives here so the
/// phase formulas and the dot layout cannot drift apart. Dot `i` sits at
/// angle `i·60° + state.angle` on the orbit circle, measured clockwise
/// from straight up.
#[must_use]
pub fn resolve(state: &AnimationState, metrics: &LayoutMetrics) -> Frame {
    let ring = Ring {
        center: metrics.center,
        radius: state.ring_radius,
        stroke_width: state.ring_stroke_width,
        color: RING_COLOR,
    };
    let dots = std::array::from_fn(|i| {
        let theta = i as f32 * SLOT_SPACING + state.angle;
        let offset = Vec2::new(theta.sin(), -theta.cos());
        Dot {
            center: metrics.center + state.orbit_radius * offset,
            radius: metrics.dot_radius,
            color: DOT_COLORS[i],
        }
    });
    Frame { ring, dots }
}
