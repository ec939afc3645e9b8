pub mod angle;
pub mod stats;

pub use angle::AngleHelper;
pub use stats::StatsHelper;
