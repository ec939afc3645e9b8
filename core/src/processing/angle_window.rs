use crate::math::angle::AngleHelper;
use crate::prelude::{RangeScan, ScanError, ScanResult};
use crate::scan_interface::IndexWindow;
use log::debug;

/// Maps a direction and an angular width onto an inclusive sample window.
pub struct AngleWindowResolver;

impl AngleWindowResolver {
    /// Resolves `angle_deg ± window_deg / 2` to sample indices.
    ///
    /// Each bound is rounded half away from zero and clamped into the frame, so
    /// queries beyond the field of view collapse onto the first or last sample
    /// rather than failing. Sweeps with a negative `angle_increment` produce the
    /// bounds in reverse; they are reordered so `idx_min <= idx_max` always holds.
    pub fn resolve<S: RangeScan + ?Sized>(
        scan: &S,
        angle_deg: f32,
        window_deg: f32,
    ) -> ScanResult<IndexWindow> {
        let len = scan.len();
        if len == 0 {
            return Err(ScanError::EmptyFrame);
        }

        let angle_min = scan.angle_min() as f64;
        let increment = scan.angle_increment() as f64;
        if !angle_min.is_finite() {
            return Err(ScanError::InvalidGeometry(format!(
                "angle_min {} is not finite",
                angle_min
            )));
        }
        if !increment.is_finite() || increment == 0.0 {
            return Err(ScanError::InvalidGeometry(format!(
                "angle_increment {} cannot index samples",
                increment
            )));
        }
        if !angle_deg.is_finite() || !window_deg.is_finite() {
            return Err(ScanError::InvalidQuery(format!(
                "angle {} deg, window {} deg",
                angle_deg, window_deg
            )));
        }

        let angle_rad = (angle_deg as f64).to_radians();
        let half_window = (window_deg as f64).to_radians() / 2.0;

        let lower = AngleHelper::fractional_index(angle_rad - half_window, angle_min, increment);
        let upper = AngleHelper::fractional_index(angle_rad + half_window, angle_min, increment);
        let idx_lower = AngleHelper::clamp_index(lower, len);
        let idx_upper = AngleHelper::clamp_index(upper, len);

        if idx_lower > idx_upper {
            debug!(
                "window for {} deg came out inverted ({}, {}), reordering",
                angle_deg, idx_lower, idx_upper
            );
        }
        Ok(IndexWindow::ordered(idx_lower, idx_upper))
    }
}
