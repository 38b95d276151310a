//! Candidate selection
//!
//! A candidate is a node of the base type whose interaction count lies
//! strictly between 0 and the configured upper bound.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{SamplerError, SamplerResult};
use crate::graph::{Edge, InteractionIndex};

/// Suffix joining a base name to the node type it selects (`user` -> `user_id`)
pub const BASE_TYPE_SUFFIX: &str = "_id";

pub fn base_node_type(base: &str) -> String {
    format!("{}{}", base, BASE_TYPE_SUFFIX)
}

/// Eligible seeds with their interactions, in node-file order
#[derive(Debug, Default)]
pub struct CandidateSet<'i> {
    entries: IndexMap<&'i str, &'i [&'i Edge]>,
}

impl<'i> CandidateSet<'i> {
    /// Select the candidates of `base` with `0 < interactions < max_interactions`.
    pub fn select<'a: 'i>(
        index: &'i InteractionIndex<'a>,
        base: &str,
        max_interactions: usize,
    ) -> SamplerResult<Self> {
        let node_type = base_node_type(base);
        let bucket = index.bucket(&node_type).ok_or_else(|| SamplerError::Sampling {
            base: base.to_string(),
            reason: format!("no node of type '{}' in the dataset", node_type),
        })?;

        let entries: IndexMap<&'i str, &'i [&'i Edge]> = bucket
            .iter()
            .filter(|(_, interactions)| {
                !interactions.is_empty() && interactions.len() < max_interactions
            })
            .map(|(id, interactions)| (*id, interactions.as_slice()))
            .collect();

        debug!(
            "{} of {} '{}' nodes have between 1 and {} interactions",
            entries.len(),
            bucket.len(),
            node_type,
            max_interactions.saturating_sub(1)
        );

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Candidate id at `position` in selection order
    pub fn id_at(&self, position: usize) -> Option<&'i str> {
        self.entries.get_index(position).map(|(id, _)| *id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'i str> + '_ {
        self.entries.keys().copied()
    }
}
