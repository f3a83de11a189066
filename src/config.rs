use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::dataset::ScanOptions;
use crate::split::{DEFAULT_EVERY_N, SplitOptions};
use crate::stats::TargetCounts;

/// Options for the proportion analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// Image counts to bucket classes by
    pub target_counts: TargetCounts,
}

/// Options for train/test list generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitSection {
    /// One test image per `every_n` images of a class
    pub every_n: usize,

    #[serde(flatten)]
    pub output: SplitOptions,
}

impl Default for SplitSection {
    fn default() -> Self {
        Self {
            every_n: DEFAULT_EVERY_N,
            output: SplitOptions::default(),
        }
    }
}

/// Where charts go
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSection {
    /// Directory receiving SVG charts. Charts are only logged when unset
    pub output_dir: Option<PathBuf>,
}

/// Analyzer configuration, usually read from a TOML file
///
/// ```toml
/// [scan]
/// extensions = ["jpg", "png"]
///
/// [analysis]
/// target_counts = [1, 2, 3]
///
/// [split]
/// every_n = 3
/// train_list = "lists/train.txt"
/// report = true
///
/// [charts]
/// output_dir = "charts"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub scan: ScanOptions,
    pub analysis: AnalysisSection,
    pub split: SplitSection,
    pub charts: ChartSection,
}

impl AnalyzerConfig {
    /// Load the configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse the configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
