/// Distance from the origin to the first wall of a straight corridor along
/// a beam at `angle` (rad, 0 = forward, positive = left).
///
/// Walls sit at `y = left`, `y = -right` and `x = end`. Beams that hit
/// nothing (pointing back down an open corridor) return `+inf`.
pub fn corridor_distance(angle: f32, left: f32, right: f32, end: f32) -> f32 {
    let (sin, cos) = angle.sin_cos();
    let mut nearest = f32::INFINITY;
    if sin > f32::EPSILON {
        nearest = nearest.min(left / sin);
    }
    if sin < -f32::EPSILON {
        nearest = nearest.min(right / -sin);
    }
    if cos > f32::EPSILON {
        nearest = nearest.min(end / cos);
    }
    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn beams_hit_the_expected_walls() {
        assert!((corridor_distance(0.0, 1.0, 1.5, 6.0) - 6.0).abs() < 1e-5);
        assert!((corridor_distance(FRAC_PI_2, 1.0, 1.5, 6.0) - 1.0).abs() < 1e-5);
        assert!((corridor_distance(-FRAC_PI_2, 1.0, 1.5, 6.0) - 1.5).abs() < 1e-5);
    }

    #[test]
    fn open_end_returns_infinity() {
        assert_eq!(corridor_distance(std::f32::consts::PI, 1.0, 1.0, 6.0), f32::INFINITY);
    }
}
