pub mod types;
pub mod scanner;
pub mod index;

// Re-export the main API for easier access
pub use types::{ClassRecord, ScanOptions, ScannedClass};
pub use scanner::DirectoryScanner;
pub use index::DatasetIndex;
