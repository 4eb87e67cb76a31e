//! Circle projection math.

use glam::Vec2;

/// Project `(radius, angle)` onto a circle centered at `center`.
///
/// Pure function: `center + (cos(angle), sin(angle)) * radius`. All real
/// inputs are valid.
#[inline]
#[must_use]
pub fn point_on_circle(radius: f32, angle: f32, center: Vec2) -> Vec2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_zero_angle_lands_on_positive_x() {
        let p = point_on_circle(5.0, 0.0, Vec2::ZERO);
        assert!((p - Vec2::new(5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_quarter_turn_lands_on_positive_y() {
        let p = point_on_circle(5.0, FRAC_PI_2, Vec2::ZERO);
        assert!((p - Vec2::new(0.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_point_stays_on_circle() {
        let radius = 320.0;
        for i in 0..32 {
            let angle = i as f32 * 0.41;
            let p = point_on_circle(radius, angle, Vec2::ZERO);
            assert!(
                (p.length() - radius).abs() < 1e-2,
                "angle {angle}: |p| = {} != {radius}",
                p.length()
            );
        }
    }

    #[test]
    fn test_center_offsets_result() {
        let center = Vec2::new(10.0, -20.0);
        let p = point_on_circle(3.0, 0.0, center);
        assert!((p - Vec2::new(13.0, -20.0)).length() < 1e-5);
    }
}
