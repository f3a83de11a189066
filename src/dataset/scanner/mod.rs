mod image_collector;
mod progress;

use std::path::Path;

use log::{debug, info};

use crate::dataset::types::{ScanOptions, ScannedClass};
use crate::error::{DatasetError, Result};

// Re-export from submodules
pub use image_collector::ImageCollector;
pub use progress::ProgressTracker;

/// Directory scanner responsible for listing classes and their images
#[derive(Debug)]
pub struct DirectoryScanner {
    /// Collector for class directories and image files
    collector: ImageCollector,

    /// Progress tracker for displaying progress
    progress_tracker: ProgressTracker,
}

impl DirectoryScanner {
    /// Create a new scanner with the given options
    pub fn new(options: ScanOptions) -> Self {
        let collector = match &options.extensions {
            Some(extensions) => ImageCollector::with_extensions(extensions.clone()),
            None => ImageCollector::new(),
        }
        .follow_links(options.follow_links);

        Self {
            progress_tracker: ProgressTracker::new(options.show_progress),
            collector,
        }
    }

    /// Scan the dataset root and return every class with its images, in listing order
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<Vec<ScannedClass>> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(DatasetError::InvalidPath(root.to_path_buf()));
        }

        let class_dirs = self.collector.collect_classes(root)?;
        if class_dirs.is_empty() {
            return Err(DatasetError::EmptyDataset(root.to_path_buf()));
        }

        info!("Analyzing dataset's content: {} classes in {}", class_dirs.len(), root.display());

        let classes = self.progress_tracker.track_progress(&class_dirs, |(name, dir)| {
            let images = self.collector.collect_images(dir)?;
            if images.is_empty() {
                return Err(DatasetError::EmptyClass(name.clone()));
            }
            debug!("Class {}: {} images", name, images.len());
            Ok(ScannedClass::new(name.clone(), images))
        })?;

        Ok(classes)
    }
}
