use log::{debug, info};

use super::types::{SplitOptions, TrainTestSplit};
use crate::chart::ChartRenderer;
use crate::dataset::DatasetIndex;
use crate::error::{DatasetError, Result};
use crate::utils::file_utils;

/// Builds train/test lists from a [`DatasetIndex`]
#[derive(Debug, Clone, Copy)]
pub struct SplitGenerator<'a> {
    index: &'a DatasetIndex,
}

impl<'a> SplitGenerator<'a> {
    pub fn new(index: &'a DatasetIndex) -> Self {
        Self { index }
    }

    /// Split every class holding at least `n` images
    ///
    /// The first `image_count / n` images of a class go to the test list and
    /// the rest to the train list. Classes with fewer than `n` images are
    /// skipped and do not consume a label.
    pub fn create_train_test_split(&self, n: usize) -> Result<TrainTestSplit> {
        if n == 0 {
            return Err(DatasetError::InvalidArgument(
                "split parameter n must be a positive integer".to_string(),
            ));
        }

        let mut split = TrainTestSplit::default();
        let mut class_counter = 0usize;

        for (name, record) in self.index.classes() {
            if record.image_count < n {
                debug!("Skipping class {} with {} images", name, record.image_count);
                continue;
            }

            let test_count = record.image_count / n;
            for (i, image) in record.images.iter().enumerate() {
                let item = format!("{}/{} {}", name, image, class_counter);
                if i < test_count {
                    split.test.push(item.clone());
                } else {
                    split.train.push(item.clone());
                }
                split.full.push(item);
            }
            class_counter += 1;
        }

        split.class_count = class_counter;
        debug!(
            "Split {} classes into {} train and {} test items",
            split.class_count,
            split.train.len(),
            split.test.len()
        );
        Ok(split)
    }

    /// Split, then write the requested list files and optionally report
    pub fn create_train_test_split_with(
        &self,
        n: usize,
        options: &SplitOptions,
        renderer: Option<&dyn ChartRenderer>,
    ) -> Result<TrainTestSplit> {
        let split = self.create_train_test_split(n)?;

        let outputs = [
            (&options.train_list, &split.train),
            (&options.test_list, &split.test),
            (&options.full_list, &split.full),
        ];
        for (path, list) in outputs {
            if let Some(path) = path {
                file_utils::write_lines(path, list)?;
                info!("Wrote {} items to {}", list.len(), path.display());
            }
        }

        if options.report {
            for line in split.lines() {
                info!("{}", line);
            }
            if let Some(renderer) = renderer {
                if !split.full.is_empty() {
                    renderer.render_pie(&split.pie_chart())?;
                }
            }
        }

        Ok(split)
    }
}
