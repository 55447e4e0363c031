//! Collision checks for circular blobs in a rectangular arena
//!
//! Two cases only: circle-circle overlap for win detection, and elastic
//! reflection off the axis-aligned arena walls.

use glam::Vec2;

/// Circle-circle overlap using the blobs' widths as radii
///
/// Strict inequality: blobs exactly touching do not count as overlapping.
#[inline]
pub fn blobs_overlap(a_pos: Vec2, a_width: f32, b_pos: Vec2, b_width: f32) -> bool {
    a_pos.distance(b_pos) < a_width + b_width
}

/// Elastic wall reflection along one axis
///
/// Returns the corrected (coordinate, velocity component). A coordinate
/// strictly outside `[0, extent]` is clamped back in and the velocity
/// component negated; a coordinate exactly on a wall is left alone.
#[inline]
pub fn bounce_axis(coord: f32, vel: f32, extent: f32) -> (f32, f32) {
    if coord > extent || coord < 0.0 {
        (coord.min(extent).max(0.0), -vel)
    } else {
        (coord, vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blobs_overlap_when_closer_than_width_sum() {
        assert!(blobs_overlap(Vec2::ZERO, 10.0, Vec2::new(15.0, 0.0), 10.0));
    }

    #[test]
    fn test_blobs_apart_do_not_overlap() {
        assert!(!blobs_overlap(Vec2::ZERO, 10.0, Vec2::new(25.0, 0.0), 10.0));
    }

    #[test]
    fn test_exact_touch_is_not_overlap() {
        assert!(!blobs_overlap(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0));
    }

    #[test]
    fn test_bounce_inside_is_untouched() {
        assert_eq!(bounce_axis(500.0, 7.0, 1000.0), (500.0, 7.0));
    }

    #[test]
    fn test_bounce_past_far_wall_clamps_and_flips() {
        assert_eq!(bounce_axis(1010.0, 7.0, 1000.0), (1000.0, -7.0));
    }

    #[test]
    fn test_bounce_past_near_wall_clamps_and_flips() {
        assert_eq!(bounce_axis(-3.0, -7.0, 1000.0), (0.0, 7.0));
    }

    #[test]
    fn test_exactly_on_wall_does_not_flip() {
        assert_eq!(bounce_axis(1000.0, 7.0, 1000.0), (1000.0, 7.0));
        assert_eq!(bounce_axis(0.0, -7.0, 1000.0), (0.0, -7.0));
    }
}
