//! Range-scan window extraction core.
//!
//! Maps angular queries onto index windows of a single scan frame, aggregates
//! the valid samples inside them and rebuilds a masked debug frame that keeps
//! only the samples that were looked at.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod scan_interface;
pub mod telemetry;

pub use prelude::{Extremum, RangeScan, ScanConfig, ScanError, ScanResult};
pub use processing::{AngleWindowResolver, DebugScanMasker, RangeFilter, ScanAggregator};
pub use scan_interface::{IndexWindow, ScanFrame, ScanHeader, ScanSink, WindowedAverage};
