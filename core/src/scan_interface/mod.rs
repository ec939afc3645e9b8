pub mod frame;
pub mod sink;
pub mod window;

pub use frame::{ScanFrame, ScanHeader};
pub use sink::{BroadcastSink, ScanSink};
pub use window::{IndexWindow, WindowedAverage};
