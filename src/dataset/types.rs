use serde::{Deserialize, Serialize};

/// Images recorded for a single class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Number of images in the class, always equal to `images.len()`
    pub image_count: usize,

    /// Image file names in scan order
    pub images: Vec<String>,
}

impl ClassRecord {
    /// Create a record from the scanned image names
    pub fn new(images: Vec<String>) -> Self {
        Self {
            image_count: images.len(),
            images,
        }
    }
}

/// A class directory as yielded by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedClass {
    /// Directory name of the class
    pub name: String,

    /// File names found inside the class directory
    pub images: Vec<String>,
}

impl ScannedClass {
    pub fn new(name: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            name: name.into(),
            images,
        }
    }
}

/// Configuration options for dataset scanning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Accepted image extensions, matched case-insensitively. `None` accepts every file
    pub extensions: Option<Vec<String>>,

    /// Whether to follow symbolic links inside the dataset
    pub follow_links: bool,

    /// Whether to draw a progress bar while scanning classes
    pub show_progress: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: None,
            follow_links: true,
            show_progress: true,
        }
    }
}
