use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while indexing or analyzing an image dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset root is not a directory
    #[error("Given directory path is not valid: '{0}'")]
    InvalidPath(PathBuf),

    /// The dataset root contains no class directories
    #[error("No data is found in given directory: '{0}'")]
    EmptyDataset(PathBuf),

    /// A class directory contains no images
    #[error("Class with zero images is found, class: {0}")]
    EmptyClass(String),

    /// A caller-supplied argument is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup of a class that is not in the index
    #[error("Class with given name doesn't exist: {0}")]
    UnknownClass(String),

    /// Writing an output list failed
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Per-class mean requested on an index without classes
    #[error("Cannot compute mean images per class: dataset has no classes")]
    DivisionByZero,

    /// Listing the dataset failed
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendering a chart failed
    #[error("Chart error: {0}")]
    Chart(String),
}

/// Result type alias for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
