use crate::math::stats::StatsHelper;
use crate::prelude::{RangeScan, ScanConfig, ScanResult};
use crate::processing::angle_window::AngleWindowResolver;
use crate::processing::range_filter::RangeFilter;
use crate::scan_interface::WindowedAverage;
use log::trace;

/// Averages the valid samples seen in one direction.
pub struct ScanAggregator;

impl ScanAggregator {
    /// Mean of the valid samples inside `angle_deg ± window_deg / 2`.
    ///
    /// The resolved window is returned alongside the average so it can be
    /// handed to the masker without resolving again.
    pub fn windowed_average<S: RangeScan + ?Sized>(
        scan: &S,
        angle_deg: f32,
        window_deg: f32,
    ) -> ScanResult<WindowedAverage> {
        let window = AngleWindowResolver::resolve(scan, angle_deg, window_deg)?;
        let samples = &scan.ranges()[window.indices()];
        let valid: Vec<f32> =
            RangeFilter::valid_in(samples, scan.range_min(), scan.range_max()).collect();
        let average = StatsHelper::mean(valid.iter().copied());

        trace!(
            "{} deg over {:?}: {} of {} valid -> {:?}",
            angle_deg,
            window,
            valid.len(),
            samples.len(),
            average
        );

        Ok(WindowedAverage {
            average,
            window,
            valid_samples: valid.len(),
        })
    }

    /// [`ScanAggregator::windowed_average`] using the configured window width.
    pub fn windowed_average_with<S: RangeScan + ?Sized>(
        scan: &S,
        angle_deg: f32,
        config: &ScanConfig,
    ) -> ScanResult<WindowedAverage> {
        Self::windowed_average(scan, angle_deg, config.window_deg)
    }
}
