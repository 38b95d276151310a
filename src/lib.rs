//! graph-sampler - Reproducible subgraph sampling
//!
//! Draws a bounded, reproducible sample from a node/edge interaction
//! dataset: seeds of a base type are chosen among nodes with a bounded
//! number of interactions, then everything reachable from them is
//! collected into a deduplicated induced subgraph and cached next to the
//! dataset.
//!
//! # Example
//!
//! ```rust,no_run
//! use graph_sampler::{SampleRequest, SamplerConfig, SamplingRun};
//!
//! let config = SamplerConfig::default().with_storage_path("/srv/datasets");
//! let run = SamplingRun::run(&config, SampleRequest::new("user", 10, 5, "movielens"))?;
//! let data = run.data();
//! println!("{} nodes, {} edges", data.node_count, data.edge_count);
//! # Ok::<(), graph_sampler::SamplerError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod sampling;

pub use config::{load_config, SamplerConfig};
pub use error::{ErrorClass, SamplerError, SamplerResult};
pub use graph::{Edge, GraphIndex, InteractionIndex, Node};
pub use pipeline::{sample_graph, SampleData, SampleRequest, SampleSource, SamplingRun};
pub use sampling::SampledSubgraph;
