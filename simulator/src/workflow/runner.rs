use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use scancore::prelude::{Extremum, ScanConfig};
use scancore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use scancore::{DebugScanMasker, RangeFilter, ScanAggregator, ScanFrame, ScanSink, WindowedAverage};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What one frame yielded: monitoring extrema and the two directional readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameReport {
    pub stamp: f64,
    pub min_range: Option<f32>,
    pub max_range: Option<f32>,
    pub valid_samples: usize,
    pub left: WindowedAverage,
    pub right: WindowedAverage,
}

/// Per-frame workflow: extrema, left/right windowed averages, debug scan.
#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    scan_config: ScanConfig,
    metrics: Arc<MetricsRecorder>,
    logger: Arc<LogManager>,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        let scan_config = config.to_scan_config();
        Self {
            config,
            scan_config,
            metrics: Arc::new(MetricsRecorder::new()),
            logger: Arc::new(LogManager::new("runner")),
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Processes one frame and publishes its debug scan to `sink`.
    pub fn execute<K: ScanSink + ?Sized>(
        &self,
        frame: &ScanFrame,
        sink: &K,
    ) -> anyhow::Result<FrameReport> {
        match self.process(frame, sink) {
            Ok(report) => {
                self.metrics.record_processed();
                Ok(report)
            }
            Err(err) => {
                self.metrics.record_rejected();
                self.logger
                    .caution(&format!("frame at {} rejected: {:#}", frame.header.stamp, err));
                Err(err)
            }
        }
    }

    fn process<K: ScanSink + ?Sized>(
        &self,
        frame: &ScanFrame,
        sink: &K,
    ) -> anyhow::Result<FrameReport> {
        let residual = frame.angle_max_residual();
        if residual > frame.angle_increment.abs() {
            self.logger.caution(&format!(
                "angle_max disagrees with sample count by {:.4} rad",
                residual
            ));
        }

        let min_range = RangeFilter::extremum(frame, Extremum::Min);
        let max_range = RangeFilter::extremum(frame, Extremum::Max);
        let valid_samples = RangeFilter::valid_count(frame);

        let left = ScanAggregator::windowed_average_with(
            frame,
            self.config.left_angle_deg,
            &self.scan_config,
        )
        .context("averaging left window")?;
        let right = ScanAggregator::windowed_average_with(
            frame,
            self.config.right_angle_deg,
            &self.scan_config,
        )
        .context("averaging right window")?;

        for (side, reading) in [("left", &left), ("right", &right)] {
            if reading.average.is_none() {
                self.metrics.record_empty_window();
                self.logger
                    .detail(&format!("{} window {:?} has no valid sample", side, reading.window));
            }
        }

        DebugScanMasker::publish(frame, left.window, right.window, sink)
            .context("publishing debug scan")?;

        self.logger.detail(&format!(
            "frame {:.3}: min {:?} max {:?} left {:?} right {:?}",
            frame.header.stamp, min_range, max_range, left.average, right.average
        ));

        Ok(FrameReport {
            stamp: frame.header.stamp,
            min_range,
            max_range,
            valid_samples,
            left,
            right,
        })
    }
}
