use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chart::{PieChart, PieSlice};

/// Classes whose image count equals one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Target image count
    pub image_count: usize,

    /// Number of classes with exactly `image_count` images
    pub classes: usize,
}

/// Result of a proportion analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProportionReport {
    /// One bucket per target count, in the order given
    pub buckets: Vec<Bucket>,

    /// Classes not matched by any bucket
    pub remaining: usize,

    /// Number of classes in the dataset
    pub total_classes: usize,
}

impl ProportionReport {
    /// Lines describing every bucket followed by the remaining classes
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .buckets
            .iter()
            .map(|bucket| {
                format!(
                    "Number of classes with only {} images : {}",
                    bucket.image_count, bucket.classes
                )
            })
            .collect();
        lines.push(format!("Remaining number of classes : {}", self.remaining));
        lines
    }

    /// Share of each bucket, then the remaining classes, in percent of all classes
    pub fn percentages(&self) -> Vec<f64> {
        self.buckets
            .iter()
            .map(|bucket| bucket.classes)
            .chain(std::iter::once(self.remaining))
            .map(|size| size as f64 / self.total_classes as f64 * 100.0)
            .collect()
    }

    /// Pie chart with one slice per bucket plus "Other classes"
    pub fn pie_chart(&self) -> PieChart {
        let mut slices: Vec<PieSlice> = self
            .buckets
            .iter()
            .map(|bucket| PieSlice::new(format!("classes with {} imgs", bucket.image_count), bucket.classes))
            .collect();
        slices.push(PieSlice::new("Other classes", self.remaining));
        PieChart::new("class_proportions", "Proportion of classes by image count", slices)
    }
}

impl fmt::Display for ProportionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Result of [`DatasetStatistics::analyze`](super::DatasetStatistics::analyze)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_images: usize,
    pub total_classes: usize,
    pub mean_per_class: usize,
    pub min_per_class: usize,
    pub max_per_class: usize,
    pub proportion: ProportionReport,
}

impl AnalysisReport {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Number of images in image dataset: {}", self.total_images),
            format!("Number of classes in image dataset: {}", self.total_classes),
            format!("Mean number of images per class: {}", self.mean_per_class),
            format!("Minimum number of images per class: {}", self.min_per_class),
            format!("Maximum number of images per class: {}", self.max_per_class),
        ];
        lines.extend(self.proportion.lines());
        lines
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Serializable snapshot of the headline dataset statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub root: PathBuf,
    pub total_images: usize,
    pub total_classes: usize,
    pub mean_per_class: usize,
    pub min_per_class: usize,
    pub max_per_class: usize,
    pub generated_at: DateTime<Utc>,
}
