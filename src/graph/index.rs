//! Dataset loading
//!
//! Reads `node.json` and `edge.json` from a dataset directory and keeps the
//! nodes keyed by id in file order.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use super::{Edge, Node};
use crate::error::{SamplerError, SamplerResult};

pub const NODE_FILE: &str = "node.json";
pub const EDGE_FILE: &str = "edge.json";

/// Nodes by id plus the raw edge list of one dataset
#[derive(Debug, Default)]
pub struct GraphIndex {
    nodes: IndexMap<String, Node>,
    edges: Vec<Edge>,
}

impl GraphIndex {
    /// Load `node.json` and `edge.json` from `dataset_dir`.
    pub fn load(dataset_dir: &Path) -> SamplerResult<Self> {
        let nodes: Vec<Node> = read_records(&dataset_dir.join(NODE_FILE))?;
        let edges: Vec<Edge> = read_records(&dataset_dir.join(EDGE_FILE))?;
        debug!(
            "Loaded {} nodes and {} edges from {}",
            nodes.len(),
            edges.len(),
            dataset_dir.display()
        );
        Ok(Self::from_records(nodes, edges))
    }

    /// Build from in-memory records.
    ///
    /// A duplicate id replaces the earlier record but keeps its position.
    pub fn from_records(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut by_id = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            by_id.insert(node.id.clone(), node);
        }
        Self {
            nodes: by_id,
            edges,
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_type(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).map(|n| n.node_type.as_str())
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> SamplerResult<Vec<T>> {
    let file = File::open(path).map_err(|_| SamplerError::MissingInputFile {
        path: path.to_path_buf(),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        SamplerError::MalformedInputFile {
            path: path.to_path_buf(),
            source,
        }
    })
}
