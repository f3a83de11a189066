mod generator;
mod types;

// Re-export from submodules
pub use generator::SplitGenerator;
pub use types::{DEFAULT_EVERY_N, SplitOptions, TrainTestSplit};
