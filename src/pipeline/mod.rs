//! Sampling pipeline
//!
//! Orchestrates one sampling run:
//! 1. Consult the sample cache (a hit ends the run)
//! 2. Load the dataset and build the interaction index
//! 3. Select candidates and draw seeds
//! 4. Expand seeds into the induced subgraph
//! 5. Persist the sample if it is non-empty

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cache::{dataset_dir, CacheKey, SampleCache};
use crate::config::SamplerConfig;
use crate::error::SamplerResult;
use crate::graph::{Edge, GraphIndex, InteractionIndex, Node};
use crate::sampling::{base_node_type, CandidateSet, SampledSubgraph, SeedSampler, SubgraphExpander};

/// What to sample: `n` seeds of `base` with fewer than `m` interactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRequest {
    pub base: String,
    pub n: usize,
    pub m: usize,
    pub dataset_id: String,
}

impl SampleRequest {
    pub fn new(base: &str, n: usize, m: usize, dataset_id: &str) -> Self {
        Self {
            base: base.to_string(),
            n,
            m,
            dataset_id: dataset_id.to_string(),
        }
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(&self.base, self.n, self.m)
    }
}

/// Where a run's sample came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSource {
    Cache,
    Computed,
}

/// Snapshot of a finished sample, as handed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleData {
    pub node_count: usize,
    pub edge_count: usize,
    pub sampled_node_data: Vec<Node>,
    pub sampled_edge_data: Vec<Edge>,
}

/// Result of sampling an already loaded graph
#[derive(Debug, Default)]
pub struct SampleOutcome {
    pub subgraph: SampledSubgraph,
    /// Seeds in draw order
    pub seeds: Vec<String>,
    /// Number of eligible candidates the seeds were drawn from
    pub candidate_count: usize,
}

/// Select, draw and expand over `graph`.
pub fn sample_graph(
    graph: &GraphIndex,
    base: &str,
    n: usize,
    m: usize,
    random_seed: u64,
) -> SamplerResult<SampleOutcome> {
    let interactions = InteractionIndex::build(graph);
    let candidates = CandidateSet::select(&interactions, base, m)?;
    let seeds = SeedSampler::new(random_seed).draw(&candidates, n);

    let mut expander = SubgraphExpander::new(graph, &interactions);
    expander.expand_all(&seeds, &base_node_type(base))?;

    Ok(SampleOutcome {
        subgraph: expander.into_sample(),
        seeds: seeds.iter().map(|s| s.to_string()).collect(),
        candidate_count: candidates.len(),
    })
}

/// One completed sampling run
#[derive(Debug)]
pub struct SamplingRun {
    request: SampleRequest,
    sample: SampledSubgraph,
    source: SampleSource,
    seeds: Vec<String>,
    candidate_count: Option<usize>,
}

impl SamplingRun {
    /// Run the full pipeline, or return the cached sample for `request`.
    pub fn run(config: &SamplerConfig, request: SampleRequest) -> SamplerResult<Self> {
        let dir = dataset_dir(&config.storage_path, &request.dataset_id);
        let cache = SampleCache::new(&dir, &request.cache_key());

        if config.use_cache {
            if let Some(sample) = cache.load() {
                info!(
                    "Using cached sample {} for dataset '{}'",
                    request.cache_key(),
                    request.dataset_id
                );
                return Ok(Self {
                    request,
                    sample,
                    source: SampleSource::Cache,
                    seeds: Vec::new(),
                    candidate_count: None,
                });
            }
        }

        let graph = GraphIndex::load(&dir)?;
        let outcome = sample_graph(
            &graph,
            &request.base,
            request.n,
            request.m,
            config.random_seed,
        )?;

        info!(
            "Sampled {} nodes and {} edges from {} seeds ({} candidates) in dataset '{}'",
            outcome.subgraph.node_count(),
            outcome.subgraph.edge_count(),
            outcome.seeds.len(),
            outcome.candidate_count,
            request.dataset_id
        );

        if config.use_cache && !outcome.subgraph.is_empty() {
            cache.store(&outcome.subgraph)?;
        }

        Ok(Self {
            request,
            sample: outcome.subgraph,
            source: SampleSource::Computed,
            seeds: outcome.seeds,
            candidate_count: Some(outcome.candidate_count),
        })
    }

    /// Read-only snapshot of the sample.
    pub fn data(&self) -> SampleData {
        SampleData {
            node_count: self.sample.node_count(),
            edge_count: self.sample.edge_count(),
            sampled_node_data: self.sample.nodes().to_vec(),
            sampled_edge_data: self.sample.edges().to_vec(),
        }
    }

    pub fn request(&self) -> &SampleRequest {
        &self.request
    }

    pub fn sample(&self) -> &SampledSubgraph {
        &self.sample
    }

    pub fn source(&self) -> SampleSource {
        self.source
    }

    /// Seeds in draw order (empty for cached runs)
    pub fn seeds(&self) -> &[String] {
        &self.seeds
    }

    /// Candidate count, unknown for cached runs
    pub fn candidate_count(&self) -> Option<usize> {
        self.candidate_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SamplerError;
    use crate::graph::{EDGE_FILE, NODE_FILE};
    use std::fs;
    use tempfile::TempDir;

    fn write_dataset(root: &std::path::Path, id: &str, nodes: &str, edges: &str) {
        let dir = root.join(id);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(NODE_FILE), nodes).unwrap();
        fs::write(dir.join(EDGE_FILE), edges).unwrap();
    }

    #[test]
    fn test_sample_graph_scenario() {
        let graph = GraphIndex::from_records(
            vec![Node::new("u1", "user_id"), Node::new("i1", "item_id")],
            vec![Edge::new("u1", "i1")],
        );

        let outcome = sample_graph(&graph, "user", 1, 5, 42).unwrap();
        assert_eq!(outcome.candidate_count, 1);
        assert_eq!(outcome.seeds, vec!["u1".to_string()]);
        let ids: Vec<&str> = outcome.subgraph.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "i1"]);
        assert_eq!(outcome.subgraph.edges(), &[Edge::new("u1", "i1")]);
    }

    #[test]
    fn test_run_writes_then_reads_cache() {
        let tmp = TempDir::new().unwrap();
        write_dataset(
            tmp.path(),
            "ds",
            r#"[{"id": "u1", "type": "user_id"}, {"id": "i1", "type": "item_id"}]"#,
            r#"[{"source": {"data": "u1"}, "target": {"data": "i1"}}]"#,
        );
        let config = SamplerConfig::default().with_storage_path(tmp.path());

        let first = SamplingRun::run(&config, SampleRequest::new("user", 1, 5, "ds")).unwrap();
        assert_eq!(first.source(), SampleSource::Computed);
        assert!(tmp.path().join("ds/sampled_user_1_5_node.json").exists());
        assert!(tmp.path().join("ds/sampled_user_1_5_edge.json").exists());

        let second = SamplingRun::run(&config, SampleRequest::new("user", 1, 5, "ds")).unwrap();
        assert_eq!(second.source(), SampleSource::Cache);
        assert_eq!(second.candidate_count(), None);
        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn test_without_cache_nothing_is_written() {
        let tmp = TempDir::new().unwrap();
        write_dataset(
            tmp.path(),
            "ds",
            r#"[{"id": "u1", "type": "user_id"}, {"id": "i1", "type": "item_id"}]"#,
            r#"[{"source": {"data": "u1"}, "target": {"data": "i1"}}]"#,
        );
        let config = SamplerConfig::default()
            .with_storage_path(tmp.path())
            .without_cache();

        let run = SamplingRun::run(&config, SampleRequest::new("user", 1, 5, "ds")).unwrap();
        assert_eq!(run.data().node_count, 2);
        assert!(!tmp.path().join("ds/sampled_user_1_5_node.json").exists());
    }

    #[test]
    fn test_missing_dataset_is_missing_input() {
        let tmp = TempDir::new().unwrap();
        let config = SamplerConfig::default().with_storage_path(tmp.path());

        let err = SamplingRun::run(&config, SampleRequest::new("user", 1, 5, "absent")).unwrap_err();
        assert!(matches!(err, SamplerError::MissingInputFile { .. }));
    }

    #[test]
    fn test_data_field_names() {
        let graph = GraphIndex::from_records(
            vec![Node::new("u1", "user_id"), Node::new("i1", "item_id")],
            vec![Edge::new("u1", "i1")],
        );
        let outcome = sample_graph(&graph, "user", 1, 5, 42).unwrap();
        let data = SampleData {
            node_count: outcome.subgraph.node_count(),
            edge_count: outcome.subgraph.edge_count(),
            sampled_node_data: outcome.subgraph.nodes().to_vec(),
            sampled_edge_data: outcome.subgraph.edges().to_vec(),
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["node_count"], 2);
        assert_eq!(value["edge_count"], 1);
        assert_eq!(value["sampled_node_data"][0]["id"], "u1");
        assert_eq!(value["sampled_edge_data"][0]["target"]["data"], "i1");
    }
}
