//! Dataset and sample-cache path utilities

use std::fmt;
use std::path::{Path, PathBuf};

const SAMPLE_PREFIX: &str = "sampled_";
const NODE_SUFFIX: &str = "_node.json";
const EDGE_SUFFIX: &str = "_edge.json";
const TMP_SUFFIX: &str = ".tmp";

/// Identifies one cached sample within a dataset: (base, N, M)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub base: String,
    pub n: usize,
    pub m: usize,
}

impl CacheKey {
    pub fn new(base: &str, n: usize, m: usize) -> Self {
        Self {
            base: base.to_string(),
            n,
            m,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.base, self.n, self.m)
    }
}

/// Directory holding one dataset: `{storage_root}/{dataset_id}`
pub fn dataset_dir(storage_root: &Path, dataset_id: &str) -> PathBuf {
    storage_root.join(dataset_id)
}

/// `sampled_{base}_{N}_{M}_node.json`
pub fn sample_node_path(dataset_dir: &Path, key: &CacheKey) -> PathBuf {
    dataset_dir.join(format!("{}{}{}", SAMPLE_PREFIX, key, NODE_SUFFIX))
}

/// `sampled_{base}_{N}_{M}_edge.json`
pub fn sample_edge_path(dataset_dir: &Path, key: &CacheKey) -> PathBuf {
    dataset_dir.join(format!("{}{}{}", SAMPLE_PREFIX, key, EDGE_SUFFIX))
}

/// Whether `file_name` looks like a cached sample file or its leftover temp file.
pub fn is_sample_file(file_name: &str) -> bool {
    let name = file_name.strip_suffix(TMP_SUFFIX).unwrap_or(file_name);
    name.starts_with(SAMPLE_PREFIX) && (name.ends_with(NODE_SUFFIX) || name.ends_with(EDGE_SUFFIX))
}
