use crate::workflow::runner::FrameReport;
use scancore::telemetry::MetricsSnapshot;
use scancore::ScanFrame;
use serde::{Deserialize, Serialize};

/// Latest state served to the visualizer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualizationModel {
    pub debug_scan: Option<ScanFrame>,
    pub report: Option<FrameReport>,
    pub metrics: MetricsSnapshot,
}
