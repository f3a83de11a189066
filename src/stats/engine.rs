use chrono::Utc;
use log::{debug, info};

use super::report::{AnalysisReport, Bucket, DatasetSummary, ProportionReport};
use super::target_counts::TargetCounts;
use crate::chart::ChartRenderer;
use crate::dataset::{ClassRecord, DatasetIndex};
use crate::error::{DatasetError, Result};

/// Read-only statistics over a [`DatasetIndex`]
#[derive(Debug, Clone, Copy)]
pub struct DatasetStatistics<'a> {
    index: &'a DatasetIndex,
}

impl<'a> DatasetStatistics<'a> {
    pub fn new(index: &'a DatasetIndex) -> Self {
        Self { index }
    }

    /// Mean number of images per class, truncated
    pub fn mean_per_class(&self) -> Result<usize> {
        let total_classes = self.index.total_classes();
        if total_classes == 0 {
            return Err(DatasetError::DivisionByZero);
        }
        Ok(self.index.total_images() / total_classes)
    }

    /// Largest number of images in a single class
    pub fn max_per_class(&self) -> usize {
        self.index
            .classes()
            .fold(0, |max, (_, record)| max.max(record.image_count))
    }

    /// Smallest number of images in a single class
    pub fn min_per_class(&self) -> usize {
        self.index
            .classes()
            .fold(self.index.total_images(), |min, (_, record)| min.min(record.image_count))
    }

    /// Names of the classes holding exactly `n` images, in index order
    pub fn classes_with_n_images(&self, n: usize) -> Result<Vec<&'a str>> {
        if n == 0 {
            return Err(DatasetError::InvalidArgument(
                "value of n must be a positive integer".to_string(),
            ));
        }
        let classes: Vec<&'a str> = self
            .index
            .classes()
            .filter(|(_, record)| record.image_count == n)
            .map(|(name, _)| name)
            .collect();
        debug!("{} classes with {} images", classes.len(), n);
        Ok(classes)
    }

    /// Count the classes matching each target image count
    ///
    /// Logs one line per bucket and one for the remaining classes. When a
    /// renderer is supplied the buckets are also drawn as a pie chart.
    pub fn proportion(
        &self,
        target_counts: impl Into<TargetCounts>,
        renderer: Option<&dyn ChartRenderer>,
    ) -> Result<ProportionReport> {
        let targets = target_counts.into();
        targets.validate()?;
        let targets = targets.as_slice();

        let mut sizes = vec![0usize; targets.len()];
        for (_, record) in self.index.classes() {
            if let Some(pos) = targets.iter().position(|&t| t == record.image_count) {
                sizes[pos] += 1;
            }
        }

        let matched: usize = sizes.iter().sum();
        let report = ProportionReport {
            buckets: targets
                .iter()
                .zip(sizes)
                .map(|(&image_count, classes)| Bucket { image_count, classes })
                .collect(),
            remaining: self.index.total_classes() - matched,
            total_classes: self.index.total_classes(),
        };

        for line in report.lines() {
            info!("{}", line);
        }

        if let Some(renderer) = renderer {
            renderer.render_pie(&report.pie_chart())?;
        }

        Ok(report)
    }

    /// Look up a class by name
    pub fn class_info(&self, name: &str) -> Result<&'a ClassRecord> {
        self.index
            .get(name)
            .ok_or_else(|| DatasetError::UnknownClass(name.to_string()))
    }

    /// Log the headline numbers and the proportion analysis, drawing its chart
    pub fn analyze(
        &self,
        target_counts: impl Into<TargetCounts>,
        renderer: &dyn ChartRenderer,
    ) -> Result<AnalysisReport> {
        let total_images = self.index.total_images();
        let total_classes = self.index.total_classes();
        let mean_per_class = self.mean_per_class()?;
        let min_per_class = self.min_per_class();
        let max_per_class = self.max_per_class();

        info!("Number of images in image dataset: {}", total_images);
        info!("Number of classes in image dataset: {}", total_classes);
        info!("Mean number of images per class: {}", mean_per_class);
        info!("Minimum number of images per class: {}", min_per_class);
        info!("Maximum number of images per class: {}", max_per_class);

        let proportion = self.proportion(target_counts, Some(renderer))?;

        Ok(AnalysisReport {
            total_images,
            total_classes,
            mean_per_class,
            min_per_class,
            max_per_class,
            proportion,
        })
    }

    /// Snapshot of the headline numbers, stamped with the current time
    pub fn summary(&self) -> Result<DatasetSummary> {
        Ok(DatasetSummary {
            root: self.index.root().to_path_buf(),
            total_images: self.index.total_images(),
            total_classes: self.index.total_classes(),
            mean_per_class: self.mean_per_class()?,
            min_per_class: self.min_per_class(),
            max_per_class: self.max_per_class(),
            generated_at: Utc::now(),
        })
    }
}
