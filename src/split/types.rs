use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chart::{PieChart, PieSlice};

/// Default split parameter: one test image for every three images of a class
pub const DEFAULT_EVERY_N: usize = 3;

/// Train, test and full lists for an identification task
///
/// Entries read `"<class>/<image> <label>"` where labels are dense over the
/// classes that were large enough to split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainTestSplit {
    pub train: Vec<String>,
    pub test: Vec<String>,
    pub full: Vec<String>,

    /// Number of classes that received a label
    pub class_count: usize,
}

impl TrainTestSplit {
    /// Consume the split into the `(train, test, full)` triple
    pub fn into_lists(self) -> (Vec<String>, Vec<String>, Vec<String>) {
        (self.train, self.test, self.full)
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Number of classes: {}", self.class_count),
            format!("Number of train images: {}", self.train.len()),
            format!("Number of test images: {}", self.test.len()),
            format!("Total number of images: {}", self.full.len()),
        ]
    }

    /// Train versus test pie chart
    pub fn pie_chart(&self) -> PieChart {
        PieChart::new(
            "train_test_split",
            "Train / test split",
            vec![
                PieSlice::new("Train", self.train.len()),
                PieSlice::new("Test", self.test.len()),
            ],
        )
    }
}

/// Output options for a split run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// File receiving the train list
    pub train_list: Option<PathBuf>,

    /// File receiving the test list
    pub test_list: Option<PathBuf>,

    /// File receiving the full list
    pub full_list: Option<PathBuf>,

    /// Log the split counts and draw the train/test chart
    pub report: bool,
}
