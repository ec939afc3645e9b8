use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Frame-level counters shared between the processing loop and reporters.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Frames that went through the full workflow.
    pub processed: usize,
    /// Directional windows that held no valid sample.
    pub empty_windows: usize,
    /// Frames the workflow could not process.
    pub rejected: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_processed(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.processed += 1;
        }
    }

    pub fn record_empty_window(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.empty_windows += 1;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_independently() {
        let metrics = MetricsRecorder::new();
        metrics.record_processed();
        metrics.record_processed();
        metrics.record_empty_window();
        metrics.record_rejected();
        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                processed: 2,
                empty_windows: 1,
                rejected: 1,
            }
        );
    }
}
