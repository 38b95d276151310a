//! Sampling engine
//!
//! 1. Select candidates of the base type under the interaction bound
//! 2. Draw seeds from the candidates with a seeded generator
//! 3. Expand each seed into the shared induced subgraph

pub mod candidates;
pub mod expander;
pub mod seeds;
pub mod subgraph;

pub use candidates::{base_node_type, CandidateSet, BASE_TYPE_SUFFIX};
pub use expander::SubgraphExpander;
pub use seeds::{SeedSampler, DEFAULT_RANDOM_SEED};
pub use subgraph::SampledSubgraph;
