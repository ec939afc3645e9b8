/// Angle-to-index arithmetic shared by the window resolver.
///
/// Everything is evaluated in `f64` so that `f32` sensor geometry does not
/// push a boundary sample across a rounding edge.
pub struct AngleHelper;

impl AngleHelper {
    /// Fractional sample position of `angle_rad` in a sweep starting at
    /// `angle_min` with step `angle_increment`.
    pub fn fractional_index(angle_rad: f64, angle_min: f64, angle_increment: f64) -> f64 {
        (angle_rad - angle_min) / angle_increment
    }

    /// Rounds half away from zero and clamps into `[0, len - 1]`.
    ///
    /// `len` must be non-zero.
    pub fn clamp_index(position: f64, len: usize) -> usize {
        let last = (len - 1) as f64;
        position.round().clamp(0.0, last) as usize
    }
}
