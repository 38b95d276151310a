//! Sampler configuration
//!
//! Looked up in the working directory in this order:
//!
//! 1. `sampler.toml`
//! 2. `.samplerrc.json`
//! 3. `config.yml` / `config.yaml`
//!
//! ```toml
//! # sampler.toml
//! storage_path = "/srv/datasets"
//! random_seed = 42
//! use_cache = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SamplerError, SamplerResult};
use crate::sampling::DEFAULT_RANDOM_SEED;

/// Settings passed into every sampling run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Root directory holding one sub-directory per dataset id
    pub storage_path: PathBuf,
    /// Seed for the seed-drawing generator
    pub random_seed: u64,
    /// Read and write materialized samples
    pub use_cache: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("."),
            random_seed: DEFAULT_RANDOM_SEED,
            use_cache: true,
        }
    }
}

impl SamplerConfig {
    /// Load an explicitly named config file. Missing or malformed files are errors.
    pub fn from_file(path: &Path) -> SamplerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SamplerError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;

        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str::<SamplerConfig>(&content).map_err(|e| e.to_string()),
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            Some("yml") | Some("yaml") => parse_yaml(&content),
            _ => toml::from_str::<SamplerConfig>(&content)
                .map_err(|e| e.to_string())
                .or_else(|_| serde_json::from_str(&content).map_err(|e| e.to_string())),
        };

        let config = parsed.map_err(|e| {
            SamplerError::Configuration(format!("{} is not properly formatted: {}", path.display(), e))
        })?;
        debug!("Loaded sampler config from {}", path.display());
        Ok(config)
    }

    pub fn with_storage_path(mut self, storage_path: impl Into<PathBuf>) -> Self {
        self.storage_path = storage_path.into();
        self
    }

    pub fn with_random_seed(mut self, random_seed: u64) -> Self {
        self.random_seed = random_seed;
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}

/// Discover and load the config file in `dir`, or fall back to defaults.
///
/// A config file that exists but can't be parsed is an error.
pub fn load_config(dir: &Path) -> SamplerResult<SamplerConfig> {
    for name in ["sampler.toml", ".samplerrc.json", "config.yml", "config.yaml"] {
        let path = dir.join(name);
        if path.exists() {
            return SamplerConfig::from_file(&path);
        }
    }

    debug!("No sampler config found in {}, using defaults", dir.display());
    Ok(SamplerConfig::default())
}

fn parse_yaml(content: &str) -> Result<SamplerConfig, String> {
    // An empty document means "all defaults", same as an empty TOML file
    if content.trim().is_empty() {
        return Ok(SamplerConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| e.to_string())
}
