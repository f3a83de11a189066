mod engine;
mod report;
mod target_counts;

// Re-export from submodules
pub use engine::DatasetStatistics;
pub use report::{AnalysisReport, Bucket, DatasetSummary, ProportionReport};
pub use target_counts::TargetCounts;
