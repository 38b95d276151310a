//! Interaction index: node type -> node id -> outgoing edges
//!
//! Every node id is registered under its type with an empty list before
//! edges are scanned, so nodes without interactions are still present.
//! An edge is appended to every bucket that knows its source id.

use indexmap::IndexMap;

use super::{Edge, GraphIndex};

/// Outgoing edges of one node, in edge-file order
pub type Interactions<'a> = Vec<&'a Edge>;

/// Node id -> interactions, in node-file order
pub type TypeBucket<'a> = IndexMap<&'a str, Interactions<'a>>;

/// Edges bucketed by the source node's type and id
#[derive(Debug, Default)]
pub struct InteractionIndex<'a> {
    buckets: IndexMap<&'a str, TypeBucket<'a>>,
}

impl<'a> InteractionIndex<'a> {
    pub fn build(graph: &'a GraphIndex) -> Self {
        let mut buckets: IndexMap<&'a str, TypeBucket<'a>> = IndexMap::new();
        for node in graph.nodes() {
            buckets
                .entry(node.node_type.as_str())
                .or_default()
                .insert(node.id.as_str(), Vec::new());
        }

        for edge in graph.edges() {
            let source = edge.source_id();
            for bucket in buckets.values_mut() {
                if let Some(list) = bucket.get_mut(source) {
                    list.push(edge);
                }
            }
        }

        Self { buckets }
    }

    pub fn bucket(&self, node_type: &str) -> Option<&TypeBucket<'a>> {
        self.buckets.get(node_type)
    }

    /// Outgoing edges of `id` within `node_type`'s bucket (empty if unknown)
    pub fn interactions(&self, node_type: &str, id: &str) -> &[&'a Edge] {
        self.buckets
            .get(node_type)
            .and_then(|bucket| bucket.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
