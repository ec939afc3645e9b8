pub mod aggregator;
pub mod angle_window;
pub mod masker;
pub mod range_filter;

pub use aggregator::ScanAggregator;
pub use angle_window::AngleWindowResolver;
pub use masker::DebugScanMasker;
pub use range_filter::RangeFilter;
