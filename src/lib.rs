pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod split;
pub mod stats;
pub mod utils;

#[cfg(test)]
mod tests;

use std::path::Path;

// Re-export main types and functions for easier access
pub use chart::{ChartRenderer, LogChartRenderer, PieChart, PieSlice, SvgChartRenderer};
pub use config::AnalyzerConfig;
pub use dataset::{ClassRecord, DatasetIndex, DirectoryScanner, ScanOptions, ScannedClass};
pub use error::{DatasetError, Result};
pub use split::{SplitGenerator, SplitOptions, TrainTestSplit};
pub use stats::{AnalysisReport, DatasetStatistics, DatasetSummary, ProportionReport, TargetCounts};

/// An image classification dataset laid out as `root/<class>/<image>`
///
/// The directory is scanned once when the dataset is opened; statistics and
/// splits are then computed from that snapshot.
#[derive(Debug, Clone)]
pub struct ImageDataset {
    index: DatasetIndex,
}

impl ImageDataset {
    /// Open a dataset with default scan options
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(root, ScanOptions::default())
    }

    /// Open a dataset with the given scan options
    pub fn open_with(root: impl AsRef<Path>, options: ScanOptions) -> Result<Self> {
        Ok(Self {
            index: DatasetIndex::open(root, options)?,
        })
    }

    pub fn index(&self) -> &DatasetIndex {
        &self.index
    }

    pub fn statistics(&self) -> DatasetStatistics<'_> {
        DatasetStatistics::new(&self.index)
    }

    pub fn splits(&self) -> SplitGenerator<'_> {
        SplitGenerator::new(&self.index)
    }
}
