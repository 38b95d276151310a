//! Configuration module
//!
//! This module handles:
//! - Sampler configuration files (sampler.toml, .samplerrc.json, config.yml)
//! - Config file discovery in the working directory

mod sampler_config;

pub use sampler_config::{load_config, SamplerConfig};
