use crate::math::stats::StatsHelper;
use crate::prelude::{Extremum, RangeScan};
use log::trace;

/// Validity predicate and whole-frame extrema.
pub struct RangeFilter;

impl RangeFilter {
    /// A sample is usable when it is finite and inside the sensor's declared range.
    pub fn is_valid(sample: f32, range_min: f32, range_max: f32) -> bool {
        sample.is_finite() && range_min <= sample && sample <= range_max
    }

    /// Valid samples of `samples`, judged against the given bounds.
    pub fn valid_in(
        samples: &[f32],
        range_min: f32,
        range_max: f32,
    ) -> impl Iterator<Item = f32> + '_ {
        samples
            .iter()
            .copied()
            .filter(move |&r| Self::is_valid(r, range_min, range_max))
    }

    pub fn valid_samples<S>(scan: &S) -> impl Iterator<Item = f32> + '_
    where
        S: RangeScan + ?Sized,
    {
        Self::valid_in(scan.ranges(), scan.range_min(), scan.range_max())
    }

    pub fn valid_count<S: RangeScan + ?Sized>(scan: &S) -> usize {
        Self::valid_samples(scan).count()
    }

    /// Smallest or largest valid sample, `None` when the frame holds no valid sample.
    pub fn extremum<S: RangeScan + ?Sized>(scan: &S, kind: Extremum) -> Option<f32> {
        let value = match kind {
            Extremum::Min => StatsHelper::min(Self::valid_samples(scan)),
            Extremum::Max => StatsHelper::max(Self::valid_samples(scan)),
        };
        trace!("{:?} over {} samples -> {:?}", kind, scan.len(), value);
        value
    }

    /// [`RangeFilter::extremum`] with `0.0` reported for a frame without valid samples.
    ///
    /// The zero cannot be told apart from an object touching the sensor; prefer
    /// the `Option` form unless a downstream consumer expects the number.
    pub fn extremum_or_zero<S: RangeScan + ?Sized>(scan: &S, kind: Extremum) -> f32 {
        Self::extremum(scan, kind).unwrap_or(0.0)
    }
}
