use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::dataset::scanner::DirectoryScanner;
use crate::dataset::types::{ClassRecord, ScanOptions, ScannedClass};
use crate::error::{DatasetError, Result};

/// Immutable snapshot of a dataset: classes in scan order with their images
///
/// Built once, either straight from the filesystem with [`DatasetIndex::open`]
/// or from already scanned classes with [`DatasetIndex::build`]. Every query
/// made against one index sees the same data, whatever happens on disk later.
#[derive(Debug, Clone)]
pub struct DatasetIndex {
    /// Dataset root the index was built from
    root: PathBuf,

    /// Class records in insertion order
    classes: Vec<(String, ClassRecord)>,

    /// Position of each class in `classes`
    positions: HashMap<String, usize>,

    /// Number of classes
    total_classes: usize,

    /// Number of images over all classes
    total_images: usize,
}

impl DatasetIndex {
    /// Scan `root` and build the index
    pub fn open(root: impl AsRef<Path>, options: ScanOptions) -> Result<Self> {
        let root = root.as_ref();
        let scanned = DirectoryScanner::new(options).scan(root)?;
        Self::build(root, scanned)
    }

    /// Build the index from scanner output, keeping the given order
    pub fn build(root: impl AsRef<Path>, scanned: Vec<ScannedClass>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if scanned.is_empty() {
            return Err(DatasetError::EmptyDataset(root));
        }

        let mut classes = Vec::with_capacity(scanned.len());
        let mut positions = HashMap::with_capacity(scanned.len());
        let mut total_images = 0;

        for ScannedClass { name, images } in scanned {
            if images.is_empty() {
                return Err(DatasetError::EmptyClass(name));
            }
            if positions.contains_key(&name) {
                return Err(DatasetError::InvalidArgument(format!("duplicate class name: {}", name)));
            }
            total_images += images.len();
            positions.insert(name.clone(), classes.len());
            classes.push((name, ClassRecord::new(images)));
        }

        let total_classes = classes.len();
        info!("Indexed {} images in {} classes", total_images, total_classes);
        debug!("Dataset root: {}", root.display());

        Ok(Self {
            root,
            classes,
            positions,
            total_classes,
            total_images,
        })
    }

    /// Get the dataset root
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn total_classes(&self) -> usize {
        self.total_classes
    }

    pub fn total_images(&self) -> usize {
        self.total_images
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over classes in scan order
    pub fn classes(&self) -> impl Iterator<Item = (&str, &ClassRecord)> {
        self.classes.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Get a class record by name
    pub fn get(&self, name: &str) -> Option<&ClassRecord> {
        self.positions.get(name).map(|&pos| &self.classes[pos].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }
}
