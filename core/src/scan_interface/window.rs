use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Inclusive index range into a frame's `ranges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexWindow {
    pub idx_min: usize,
    pub idx_max: usize,
}

impl IndexWindow {
    /// Builds a window from two bounds in either order.
    pub fn ordered(a: usize, b: usize) -> Self {
        Self {
            idx_min: a.min(b),
            idx_max: a.max(b),
        }
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.idx_min..=self.idx_max
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }

    /// Number of indices covered, zero for an inverted pair.
    pub fn len(&self) -> usize {
        if self.idx_min > self.idx_max {
            0
        } else {
            self.idx_max - self.idx_min + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every index lies inside a frame of `frame_len` samples.
    pub fn fits(&self, frame_len: usize) -> bool {
        self.idx_min <= self.idx_max && self.idx_max < frame_len
    }
}

impl From<(usize, usize)> for IndexWindow {
    fn from((idx_min, idx_max): (usize, usize)) -> Self {
        Self { idx_min, idx_max }
    }
}

/// Result of averaging the valid samples inside an angular window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowedAverage {
    /// Mean of the valid samples, `None` when the window held none.
    pub average: Option<f32>,
    pub window: IndexWindow,
    pub valid_samples: usize,
}

impl WindowedAverage {
    /// Average with `+inf` standing in for "nothing seen in this direction".
    pub fn average_or_infinity(&self) -> f32 {
        self.average.unwrap_or(f32::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_sorts_bounds() {
        assert_eq!(IndexWindow::ordered(7, 3), IndexWindow { idx_min: 3, idx_max: 7 });
        assert_eq!(IndexWindow::ordered(3, 7), IndexWindow::from((3, 7)));
    }

    #[test]
    fn fits_rejects_inverted_and_overlong_windows() {
        assert!(IndexWindow::from((0, 4)).fits(5));
        assert!(!IndexWindow::from((0, 5)).fits(5));
        assert!(!IndexWindow::from((3, 2)).fits(5));
        assert_eq!(IndexWindow::from((3, 2)).len(), 0);
        assert_eq!(IndexWindow::from((2, 2)).len(), 1);
    }

    #[test]
    fn missing_average_reads_as_infinity() {
        let empty = WindowedAverage {
            average: None,
            window: IndexWindow::from((0, 1)),
            valid_samples: 0,
        };
        assert_eq!(empty.average_or_infinity(), f32::INFINITY);
    }
}
