//! Fixed color palette for the indicator.
//!
//! Six dot colors plus the ring color, as linear RGB triples. The palette is
//! ordered and invariant: dot `i` always draws with `DOT_COLORS[i]`.

/// Number of orbiting dots. The geometry, the palette, and the frame layout
/// all agree on this count.
pub const DOT_COUNT: usize = 6;

/// RGB colors for the six dots, in draw order.
pub const DOT_COLORS: [[f32; 3]; DOT_COUNT] = [
    [0.188, 0.475, 0.965], // blue    #3079F6
    [0.894, 0.102, 0.102], // red     #E41A1A
    [0.200, 0.765, 0.224], // green   #33C339
    [0.384, 0.000, 0.933], // purple  #6200EE
    [0.004, 0.529, 0.525], // teal    #018786
    [0.749, 0.675, 0.012], // yellow  #BFAC03
];

/// RGB color of the hollow ring.
pub const RING_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_dot_count() {
        assert_eq!(DOT_COLORS.len(), DOT_COUNT);
    }

    #[test]
    fn colors_are_normalized() {
        for color in DOT_COLORS.iter().chain(std::iter::once(&RING_COLOR)) {
            for channel in color {
                assert!((0.0..=1.0).contains(channel));
            }
        }
    }

    #[test]
    fn colors_are_distinct() {
        for (i, a) in DOT_COLORS.iter().enumerate() {
            for b in &DOT_COLORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
