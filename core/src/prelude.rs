use serde::{Deserialize, Serialize};

/// Default angular width (degrees) of a windowed average query.
pub const DEFAULT_WINDOW_DEG: f32 = 2.0;

/// Shared configuration for windowed queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub window_deg: f32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            window_deg: DEFAULT_WINDOW_DEG,
        }
    }
}

/// Which end of the valid samples an extremum query reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extremum {
    Min,
    Max,
}

/// Common error type for scan operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("scan frame has no samples")]
    EmptyFrame,
    #[error("invalid scan geometry: {0}")]
    InvalidGeometry(String),
    #[error("invalid angular query: {0}")]
    InvalidQuery(String),
    #[error("window ({idx_min}, {idx_max}) does not fit a frame of {len} samples")]
    WindowOutOfBounds {
        idx_min: usize,
        idx_max: usize,
        len: usize,
    },
}

pub type ScanResult<T> = Result<T, ScanError>;

/// The narrow view of a sensor frame the read-only operations depend on.
///
/// Anything carrying ranged samples plus the angular and range bounds can be
/// filtered, resolved and aggregated without pulling in a full message type.
pub trait RangeScan {
    fn ranges(&self) -> &[f32];
    fn angle_min(&self) -> f32;
    fn angle_increment(&self) -> f32;
    fn range_min(&self) -> f32;
    fn range_max(&self) -> f32;

    fn len(&self) -> usize {
        self.ranges().len()
    }

    fn is_empty(&self) -> bool {
        self.ranges().is_empty()
    }
}
