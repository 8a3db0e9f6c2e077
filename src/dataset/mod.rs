//! Fixed input datasets keyed by size
//!
//! Lookups try the exact size first and fall back to the designated default
//! size. The built-in sets (10, 25 and 50 values, all non-negative) are
//! embedded at compile time.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const BUILTIN_JSON: &str = include_str!("../../data/datasets.json");

/// Size used for fallback by [`Datasets::builtin`]
pub const DEFAULT_SIZE: usize = 10;

/// Errors raised while loading or querying datasets
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("no dataset for size {size} and no default size to fall back to")]
    InvalidSize { size: usize },

    #[error("dataset key '{key}' is not a size")]
    InvalidKey { key: String },

    #[error("failed to read datasets: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed datasets: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Size-to-sequence lookup with an optional default size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datasets {
    sets: BTreeMap<usize, Vec<i64>>,
    default_size: Option<usize>,
}

impl Datasets {
    pub fn new(sets: BTreeMap<usize, Vec<i64>>, default_size: Option<usize>) -> Self {
        Datasets { sets, default_size }
    }

    /// The embedded datasets, defaulting to size 10
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_JSON) {
            Ok(sets) => sets.with_default(Some(DEFAULT_SIZE)),
            Err(e) => {
                log::error!("embedded datasets are malformed: {}", e);
                Datasets::new(BTreeMap::new(), None)
            }
        }
    }

    /// Parse `{"10": [...], "25": [...]}`. The smallest size becomes the default.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: BTreeMap<String, Vec<i64>> = serde_json::from_str(json)?;
        let mut sets = BTreeMap::new();
        for (key, values) in raw {
            let size = key
                .trim()
                .parse::<usize>()
                .map_err(|_| DatasetError::InvalidKey { key: key.clone() })?;
            sets.insert(size, values);
        }
        let default_size = sets.keys().next().copied();
        Ok(Datasets { sets, default_size })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let sets = Self::from_json(&json)?;
        log::info!(
            "loaded {} datasets from {}",
            sets.sets.len(),
            path.display()
        );
        Ok(sets)
    }

    /// Replace the fallback size
    pub fn with_default(mut self, default_size: Option<usize>) -> Self {
        self.default_size = default_size;
        self
    }

    pub fn default_size(&self) -> Option<usize> {
        self.default_size
    }

    /// Available sizes, ascending
    pub fn sizes(&self) -> Vec<usize> {
        self.sets.keys().copied().collect()
    }

    /// Sequence for `size`, falling back to the default size's sequence
    pub fn lookup(&self, size: usize) -> Result<&[i64], DatasetError> {
        if let Some(values) = self.sets.get(&size) {
            return Ok(values);
        }
        let fallback = self
            .default_size
            .and_then(|default| self.sets.get(&default))
            .ok_or(DatasetError::InvalidSize { size })?;
        log::debug!("no dataset for size {}, using default", size);
        Ok(fallback)
    }
}

impl Default for Datasets {
    fn default() -> Self {
        Self::builtin()
    }
}
