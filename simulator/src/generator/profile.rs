use crate::generator::template::corridor_distance;
use anyhow::{ensure, Context};
use rand::{rngs::StdRng, Rng, SeedableRng};
use scancore::{ScanFrame, ScanHeader};
use serde::{Deserialize, Serialize};

/// Configuration for generating synthetic corridor scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub samples: usize,
    pub field_of_view_deg: f32,
    pub range_min: f32,
    pub range_max: f32,
    /// Distance to the left wall (m).
    pub left_wall: f32,
    /// Distance to the right wall (m).
    pub right_wall: f32,
    /// Distance to the wall ahead (m).
    pub end_wall: f32,
    /// Peak uniform jitter added to every return (m).
    pub noise: f32,
    /// Probability that a beam returns nothing usable.
    pub dropout: f64,
    /// Sweep clockwise, giving a negative angle increment.
    pub clockwise: bool,
    pub scan_rate_hz: f32,
    pub frame_id: String,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples: 541,
            field_of_view_deg: 270.0,
            range_min: 0.12,
            range_max: 12.0,
            left_wall: 0.8,
            right_wall: 1.2,
            end_wall: 6.0,
            noise: 0.01,
            dropout: 0.02,
            clockwise: false,
            scan_rate_hz: 10.0,
            frame_id: "laser".into(),
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    fn sweep(&self) -> (f32, f32) {
        let half = (self.field_of_view_deg / 2.0).to_radians();
        let increment = self.field_of_view_deg.to_radians() / (self.samples - 1) as f32;
        if self.clockwise {
            (half, -increment)
        } else {
            (-half, increment)
        }
    }
}

/// Builds frame `index` of a synthetic sequence. Each frame gets its own
/// deterministic noise stream derived from the configured seed.
pub fn build_scan_frame(config: &GeneratorConfig, index: u64) -> anyhow::Result<ScanFrame> {
    ensure!(
        config.samples >= 2,
        "a scan needs at least two samples, got {}",
        config.samples
    );
    ensure!(
        config.scan_rate_hz > 0.0,
        "scan rate must be positive, got {}",
        config.scan_rate_hz
    );

    let (angle_min, angle_increment) = config.sweep();
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index));
    let dropout = config.dropout.clamp(0.0, 1.0);

    let mut ranges = Vec::with_capacity(config.samples);
    for i in 0..config.samples {
        let angle = angle_min + i as f32 * angle_increment;
        if rng.gen_bool(dropout) {
            ranges.push(if i % 2 == 0 { f32::INFINITY } else { f32::NAN });
            continue;
        }
        let jitter = if config.noise > 0.0 {
            rng.gen_range(-config.noise..config.noise)
        } else {
            0.0
        };
        let distance = corridor_distance(angle, config.left_wall, config.right_wall, config.end_wall);
        ranges.push(if distance > config.range_max {
            f32::INFINITY
        } else {
            distance + jitter
        });
    }

    let scan_time = 1.0 / config.scan_rate_hz;
    let stamp = index as f64 * scan_time as f64;
    Ok(ScanFrame::from_geometry(
        angle_min,
        angle_increment,
        config.range_min,
        config.range_max,
        ranges,
    )
    .with_header(ScanHeader::new(stamp, config.frame_id.clone()))
    .with_timing(scan_time / config.samples as f32, scan_time))
}

pub fn build_scan_sequence(config: &GeneratorConfig, frames: usize) -> anyhow::Result<Vec<ScanFrame>> {
    (0..frames as u64)
        .map(|index| {
            build_scan_frame(config, index)
                .with_context(|| format!("generating synthetic frame {}", index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scancore::{Extremum, RangeFilter};

    #[test]
    fn generator_builds_expected_sample_count() {
        let frame = build_scan_frame(&GeneratorConfig::default(), 0).unwrap();
        assert_eq!(frame.ranges.len(), 541);
        assert!(frame.angle_max_residual() < 1e-4);
        assert!((frame.angle_max - 135f32.to_radians()).abs() < 1e-4);
    }

    #[test]
    fn generator_is_reproducible_per_seed() {
        let config = GeneratorConfig {
            seed: 13,
            ..Default::default()
        };
        let bits = |frame: &ScanFrame| frame.ranges.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        let a = build_scan_frame(&config, 3).unwrap();
        let b = build_scan_frame(&config, 3).unwrap();
        assert_eq!(bits(&a), bits(&b));
        assert_eq!(a.header.stamp, 3.0 * (1.0f32 / 10.0) as f64);
    }

    #[test]
    fn clockwise_sweep_has_negative_increment() {
        let config = GeneratorConfig {
            clockwise: true,
            samples: 91,
            field_of_view_deg: 180.0,
            ..Default::default()
        };
        let frame = build_scan_frame(&config, 0).unwrap();
        assert!(frame.angle_increment < 0.0);
        assert!(frame.angle_min > frame.angle_max);
    }

    #[test]
    fn noiseless_corridor_matches_geometry() {
        let config = GeneratorConfig {
            samples: 181,
            field_of_view_deg: 180.0,
            noise: 0.0,
            dropout: 0.0,
            ..Default::default()
        };
        let frame = build_scan_frame(&config, 0).unwrap();
        let nearest = RangeFilter::extremum(&frame, Extremum::Min).unwrap();
        assert!((nearest - config.left_wall).abs() < 1e-3);
        assert!((frame.ranges[90] - config.end_wall).abs() < 1e-3);
    }

    #[test]
    fn full_dropout_leaves_no_valid_sample() {
        let config = GeneratorConfig {
            dropout: 1.0,
            ..Default::default()
        };
        let frame = build_scan_frame(&config, 0).unwrap();
        assert_eq!(RangeFilter::extremum(&frame, Extremum::Max), None);
    }

    #[test]
    fn degenerate_config_is_rejected() {
        let config = GeneratorConfig {
            samples: 1,
            ..Default::default()
        };
        assert!(build_scan_frame(&config, 0).is_err());
        assert!(build_scan_sequence(&config, 2).is_err());
    }
}
