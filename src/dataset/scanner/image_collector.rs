use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{DatasetError, Result};

/// Lists class directories and the image files inside them
#[derive(Debug)]
pub struct ImageCollector {
    /// Valid file extensions to collect, empty means every file
    valid_extensions: Vec<String>,

    /// Whether to follow symbolic links
    follow_links: bool,
}

impl Default for ImageCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCollector {
    /// Create a new collector accepting every file
    pub fn new() -> Self {
        Self {
            valid_extensions: Vec::new(),
            follow_links: true,
        }
    }

    /// Create a new collector restricted to the given extensions
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        let mut collector = Self::new();
        for extension in &extensions {
            collector.add_extension(extension);
        }
        collector
    }

    pub fn follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Collect the class directories directly under the root, in listing order
    pub fn collect_classes(&self, root: impl AsRef<Path>) -> Result<Vec<(String, PathBuf)>> {
        let root = root.as_ref();
        debug!("Collecting classes from directory: {}", root.display());

        let mut classes = Vec::new();
        for entry in self.list(root) {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                warn!("Skipping non-directory entry in dataset root: {}", entry.path().display());
                continue;
            }
            let name = file_name(&entry);
            trace!("Found class: {}", name);
            classes.push((name, entry.into_path()));
        }

        debug!("Collected {} classes", classes.len());
        Ok(classes)
    }

    /// Collect the image file names of one class directory, in listing order
    pub fn collect_images(&self, class_dir: impl AsRef<Path>) -> Result<Vec<String>> {
        let class_dir = class_dir.as_ref();

        let mut images = Vec::new();
        for entry in self.list(class_dir) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                debug!("Ignoring nested directory: {}", entry.path().display());
                continue;
            }
            if !self.accepts(entry.path()) {
                trace!("Filtered out file: {}", entry.path().display());
                continue;
            }
            images.push(file_name(&entry));
        }

        trace!("Collected {} images from {}", images.len(), class_dir.display());
        Ok(images)
    }

    /// Add a valid file extension
    pub fn add_extension(&mut self, extension: &str) {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        if !self.valid_extensions.contains(&extension) {
            self.valid_extensions.push(extension);
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.valid_extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.valid_extensions.iter().any(|valid| ext.eq_ignore_ascii_case(valid)))
            .unwrap_or(false)
    }

    // Single level, unsorted: entries come back in the order the filesystem lists them.
    fn list<'a>(&self, dir: &'a Path) -> impl Iterator<Item = Result<DirEntry>> + 'a {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_links)
            .into_iter()
            .map(move |entry| {
                entry.map_err(|e| DatasetError::Io {
                    path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf()),
                    source: e.into(),
                })
            })
    }
}

// Non-UTF-8 names are kept lossily and no longer match the file on disk.
fn file_name(entry: &DirEntry) -> String {
    match entry.file_name().to_str() {
        Some(name) => name.to_string(),
        None => {
            let lossy = entry.file_name().to_string_lossy().into_owned();
            warn!("Non UTF-8 file name {}, recorded as '{}'", entry.path().display(), lossy);
            lossy
        }
    }
}
