use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};

/// Image counts to bucket classes by in a proportion analysis
///
/// Accepts a single count or a list. Order is kept and duplicates are allowed;
/// only the first occurrence of a duplicated count receives matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct TargetCounts(Vec<usize>);

impl TargetCounts {
    /// Fails with [`DatasetError::InvalidArgument`] unless every count is positive
    pub fn validate(&self) -> Result<()> {
        if self.0.contains(&0) {
            return Err(DatasetError::InvalidArgument(format!(
                "invalid target counts {:?}, please provide only positive integers",
                self.0
            )));
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Default for TargetCounts {
    fn default() -> Self {
        Self(vec![1, 2, 3])
    }
}

impl From<usize> for TargetCounts {
    fn from(count: usize) -> Self {
        Self(vec![count])
    }
}

impl From<Vec<usize>> for TargetCounts {
    fn from(counts: Vec<usize>) -> Self {
        Self(counts)
    }
}

impl From<&[usize]> for TargetCounts {
    fn from(counts: &[usize]) -> Self {
        Self(counts.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for TargetCounts {
    fn from(counts: [usize; N]) -> Self {
        Self(counts.to_vec())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(usize),
    Many(Vec<usize>),
}

impl From<OneOrMany> for TargetCounts {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(count) => Self(vec![count]),
            OneOrMany::Many(counts) => Self(counts),
        }
    }
}
