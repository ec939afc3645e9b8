use crate::prelude::RangeScan;
use serde::{Deserialize, Serialize};

/// Acquisition metadata carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanHeader {
    /// Acquisition time in seconds.
    pub stamp: f64,
    pub frame_id: String,
}

impl ScanHeader {
    pub fn new(stamp: f64, frame_id: impl Into<String>) -> Self {
        Self {
            stamp,
            frame_id: frame_id.into(),
        }
    }
}

/// One sweep of a planar range sensor.
///
/// `ranges[i]` was measured at `angle_min + i * angle_increment`. Samples that
/// are non-finite or outside `[range_min, range_max]` are kept as delivered and
/// only skipped when aggregating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanFrame {
    pub header: ScanHeader,
    /// Start angle of the sweep (rad).
    pub angle_min: f32,
    /// End angle of the sweep (rad).
    pub angle_max: f32,
    /// Angular step between consecutive samples (rad). Negative for clockwise sensors.
    pub angle_increment: f32,
    /// Time between consecutive measurements (s).
    pub time_increment: f32,
    /// Time for a full sweep (s).
    pub scan_time: f32,
    pub range_min: f32,
    pub range_max: f32,
    #[serde(with = "finite_or_null")]
    pub ranges: Vec<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intensities: Vec<f32>,
}

impl ScanFrame {
    /// Builds a frame whose `angle_max` is derived from the sample count.
    pub fn from_geometry(
        angle_min: f32,
        angle_increment: f32,
        range_min: f32,
        range_max: f32,
        ranges: Vec<f32>,
    ) -> Self {
        let last = ranges.len().saturating_sub(1) as f32;
        Self {
            angle_min,
            angle_max: angle_min + last * angle_increment,
            angle_increment,
            range_min,
            range_max,
            ranges,
            ..Default::default()
        }
    }

    pub fn with_header(mut self, header: ScanHeader) -> Self {
        self.header = header;
        self
    }

    pub fn with_timing(mut self, time_increment: f32, scan_time: f32) -> Self {
        self.time_increment = time_increment;
        self.scan_time = scan_time;
        self
    }

    /// Angle (rad) at which sample `index` was taken.
    pub fn angle_at(&self, index: usize) -> f32 {
        self.angle_min + index as f32 * self.angle_increment
    }

    /// Distance between the declared `angle_max` and the one implied by
    /// `angle_min`, `angle_increment` and the sample count.
    pub fn angle_max_residual(&self) -> f32 {
        if self.ranges.is_empty() {
            return 0.0;
        }
        (self.angle_at(self.ranges.len() - 1) - self.angle_max).abs()
    }
}

impl RangeScan for ScanFrame {
    fn ranges(&self) -> &[f32] {
        &self.ranges
    }

    fn angle_min(&self) -> f32 {
        self.angle_min
    }

    fn angle_increment(&self) -> f32 {
        self.angle_increment
    }

    fn range_min(&self) -> f32 {
        self.range_min
    }

    fn range_max(&self) -> f32 {
        self.range_max
    }
}

/// JSON cannot carry infinities: non-finite samples go out as `null` and come
/// back as `+inf`, the "no return" value.
mod finite_or_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(values: &[f32], serializer: S) -> Result<S::Ok, S::Error> {
        values
            .iter()
            .map(|value| value.is_finite().then_some(*value))
            .collect::<Vec<Option<f32>>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f32>, D::Error> {
        let values = Vec::<Option<f32>>::deserialize(deserializer)?;
        Ok(values
            .into_iter()
            .map(|value| value.unwrap_or(f32::INFINITY))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_geometry_derives_angle_max() {
        let frame = ScanFrame::from_geometry(-1.0, 0.5, 0.1, 10.0, vec![1.0; 5]);
        assert_eq!(frame.angle_max, 1.0);
        assert_eq!(frame.angle_max_residual(), 0.0);
        assert_eq!(frame.angle_at(2), 0.0);
    }

    #[test]
    fn json_maps_non_finite_samples_to_infinity() {
        let frame = ScanFrame::from_geometry(0.0, 0.1, 0.0, 5.0, vec![1.5, f32::NAN, f32::INFINITY])
            .with_header(ScanHeader::new(12.5, "laser"));

        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("[1.5,null,null]"));
        assert!(!json.contains("intensities"));

        let decoded: ScanFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.ranges[0], 1.5);
        assert_eq!(decoded.ranges[1], f32::INFINITY);
        assert_eq!(decoded.ranges[2], f32::INFINITY);
        assert_eq!(decoded.header.frame_id, "laser");
        assert!(decoded.intensities.is_empty());
    }
}
