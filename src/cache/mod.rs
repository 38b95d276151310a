//! Materialized sample cache
//!
//! A sample is cached as two pretty-printed JSON arrays next to the dataset
//! it was drawn from. A hit needs both files to exist and parse; anything
//! else is a miss and the sample is recomputed.

pub mod paths;

pub use paths::{dataset_dir, is_sample_file, sample_edge_path, sample_node_path, CacheKey};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{SamplerError, SamplerResult};
use crate::graph::{Edge, Node};
use crate::sampling::SampledSubgraph;

/// Cached sample files for one (dataset, base, N, M)
#[derive(Debug, Clone)]
pub struct SampleCache {
    node_path: PathBuf,
    edge_path: PathBuf,
}

impl SampleCache {
    pub fn new(dataset_dir: &Path, key: &CacheKey) -> Self {
        Self {
            node_path: sample_node_path(dataset_dir, key),
            edge_path: sample_edge_path(dataset_dir, key),
        }
    }

    pub fn node_path(&self) -> &Path {
        &self.node_path
    }

    pub fn edge_path(&self) -> &Path {
        &self.edge_path
    }

    /// Load a previously stored sample. Any failure is a miss.
    pub fn load(&self) -> Option<SampledSubgraph> {
        let nodes: Vec<Node> = match read_json(&self.node_path) {
            Ok(nodes) => nodes,
            Err(e) => {
                debug!("Sample cache miss: {}", e);
                return None;
            }
        };
        let edges: Vec<Edge> = match read_json(&self.edge_path) {
            Ok(edges) => edges,
            Err(e) => {
                debug!("Sample cache miss: {}", e);
                return None;
            }
        };

        debug!(
            "Sample cache hit: {} nodes, {} edges from {}",
            nodes.len(),
            edges.len(),
            self.node_path.display()
        );
        Some(SampledSubgraph::from_parts(nodes, edges))
    }

    /// Persist `sample`.
    ///
    /// Any previous node file is removed first, then each file is written
    /// to a temp sibling and renamed into place, edges before nodes. An
    /// interrupted store therefore never leaves a node file next to an edge
    /// file from a different sample; `load` treats the leftover as a miss.
    pub fn store(&self, sample: &SampledSubgraph) -> SamplerResult<()> {
        let _ = fs::remove_file(tmp_path(&self.edge_path));
        let _ = fs::remove_file(tmp_path(&self.node_path));
        match fs::remove_file(&self.node_path) {
            Ok(()) => debug!("Removed stale {}", self.node_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(SamplerError::Persistence {
                    path: self.node_path.clone(),
                    source,
                })
            }
        }

        write_json(&self.edge_path, sample.edges())?;
        write_json(&self.node_path, sample.nodes())?;
        info!(
            "Cached sample with {} nodes and {} edges at {}",
            sample.node_count(),
            sample.edge_count(),
            self.node_path.display()
        );
        Ok(())
    }
}

/// Remove every cached sample in `dataset_dir`, returning the removed paths.
///
/// With `dry_run` set nothing is deleted; the paths that would be removed
/// are still returned.
pub fn clear_samples(dataset_dir: &Path, dry_run: bool) -> SamplerResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dataset_dir).map_err(|_| SamplerError::MissingInputFile {
        path: dataset_dir.to_path_buf(),
    })?;

    let mut found: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| e.file_name().to_str().map(is_sample_file).unwrap_or(false))
        .map(|e| e.path())
        .collect();
    found.sort();

    if !dry_run {
        for path in &found {
            fs::remove_file(path).map_err(|source| SamplerError::Persistence {
                path: path.clone(),
                source,
            })?;
            debug!("Removed {}", path.display());
        }
    }

    Ok(found)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("{}: {}", path.display(), e))
}

fn tmp_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Write `value` as pretty JSON via a temp sibling; the temp file is
/// removed again if any step fails.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> SamplerResult<()> {
    let tmp = tmp_path(path);
    let file = File::create(&tmp).map_err(|source| SamplerError::Persistence {
        path: path.to_path_buf(),
        source,
    })?;

    let result = write_pretty(file, value).and_then(|()| fs::rename(&tmp, path));
    result.map_err(|source| {
        let _ = fs::remove_file(&tmp);
        SamplerError::Persistence {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_pretty<T: Serialize + ?Sized>(file: File, value: &T) -> std::io::Result<()> {
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;
    writer.flush()
}
