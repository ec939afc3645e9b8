use crate::prelude::{ScanError, ScanResult};
use crate::scan_interface::{IndexWindow, ScanFrame, ScanSink};
use log::debug;

/// Builds visualization frames that keep only the samples inside two windows.
pub struct DebugScanMasker;

impl DebugScanMasker {
    /// Copies `scan` with every sample outside `left ∪ right` replaced by `+inf`.
    ///
    /// Samples inside either window are copied unchanged. Windows come from
    /// [`AngleWindowResolver`](crate::processing::AngleWindowResolver) and are
    /// not repaired here: one that is inverted or reaches past the last sample
    /// fails the call. Intensities are not carried over.
    pub fn mask(scan: &ScanFrame, left: IndexWindow, right: IndexWindow) -> ScanResult<ScanFrame> {
        let len = scan.ranges.len();
        for window in [left, right] {
            if !window.fits(len) {
                return Err(ScanError::WindowOutOfBounds {
                    idx_min: window.idx_min,
                    idx_max: window.idx_max,
                    len,
                });
            }
        }

        let mut ranges = vec![f32::INFINITY; len];
        for window in [left, right] {
            let kept = window.indices();
            ranges[kept.clone()].copy_from_slice(&scan.ranges[kept]);
        }

        Ok(ScanFrame {
            header: scan.header.clone(),
            angle_min: scan.angle_min,
            angle_max: scan.angle_max,
            angle_increment: scan.angle_increment,
            time_increment: scan.time_increment,
            scan_time: scan.scan_time,
            range_min: scan.range_min,
            range_max: scan.range_max,
            ranges,
            intensities: Vec::new(),
        })
    }

    /// Masks `scan` and hands the result to `sink`.
    pub fn publish<K: ScanSink + ?Sized>(
        scan: &ScanFrame,
        left: IndexWindow,
        right: IndexWindow,
        sink: &K,
    ) -> ScanResult<()> {
        let masked = Self::mask(scan, left, right)?;
        debug!(
            "publishing debug scan {:?} + {:?} of {} samples",
            left,
            right,
            masked.ranges.len()
        );
        sink.publish(masked);
        Ok(())
    }
}
