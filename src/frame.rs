//! Renderable output model handed to the host once per tick.

use glam::Vec2;

use crate::palette::DOT_COUNT;

/// The hollow pulsing circle drawn behind the dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Center of the ring.
    pub center: Vec2,
    /// Radius measured to the middle of the stroke.
    pub radius: f32,
    /// Stroke width. Zero means the ring has fully thinned out.
    pub stroke_width: f32,
    /// RGB stroke color.
    pub color: [f32; 3],
}

/// One filled orbiting dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Center of the dot.
    pub center: Vec2,
    /// Dot radius.
    pub radius: f32,
    /// RGB fill color.
    pub color: [f32; 3],
}

/// A fully resolved frame: one ring plus six dots.
///
/// Frames are ephemeral - a fresh one is produced per tick and nothing in
/// the crate retains them. Hosts paint the ring first, then the dots in
/// index order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The background ring.
    pub ring: Ring,
    /// The six dots, in palette/draw order.
    pub dots: [Dot; DOT_COUNT],
}
