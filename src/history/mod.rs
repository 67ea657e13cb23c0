pub mod range;
pub mod summary;

pub use range::TimeRange;
pub use summary::SummaryStats;
