//! Depth-first reachability expansion
//!
//! Walks outgoing interactions from each seed and emits every reachable
//! node and edge into a [`SampledSubgraph`]. The walk keeps an explicit
//! stack of frames, each holding a node's outgoing edges and a cursor, so
//! the emission order matches a recursive walk that descends into a
//! target before looking at the next sibling edge.

use tracing::{debug, warn};

use super::SampledSubgraph;
use crate::error::{SamplerError, SamplerResult};
use crate::graph::{Edge, GraphIndex, InteractionIndex};

/// Outgoing edges of the node being walked and the next one to look at
struct Frame<'e> {
    edges: &'e [&'e Edge],
    cursor: usize,
}

/// Expands seeds into an induced subgraph
pub struct SubgraphExpander<'g, 'i> {
    graph: &'g GraphIndex,
    interactions: &'i InteractionIndex<'g>,
    sample: SampledSubgraph,
}

impl<'g, 'i> SubgraphExpander<'g, 'i> {
    pub fn new(graph: &'g GraphIndex, interactions: &'i InteractionIndex<'g>) -> Self {
        Self {
            graph,
            interactions,
            sample: SampledSubgraph::new(),
        }
    }

    /// Expand every seed in order, sharing one visited set.
    pub fn expand_all(&mut self, seeds: &[&str], node_type: &str) -> SamplerResult<()> {
        for seed in seeds {
            self.expand(seed, node_type)?;
        }
        Ok(())
    }

    /// Walk everything reachable from `id`, whose type selects its bucket.
    ///
    /// Fails with [`SamplerError::Traversal`] when an edge points at an
    /// unvisited id that has no node record.
    pub fn expand(&mut self, id: &str, node_type: &str) -> SamplerResult<()> {
        let before = (self.sample.node_count(), self.sample.edge_count());
        let mut stack: Vec<Frame<'i>> = Vec::new();
        if let Some(frame) = self.enter(id, node_type) {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let edges = frame.edges;
            let Some(edge) = edges.get(frame.cursor).copied() else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            self.sample.push_edge(edge);

            let target = edge.target_id();
            if self.sample.is_visited(target) {
                continue;
            }
            let target_type = self
                .graph
                .node_type(target)
                .ok_or_else(|| SamplerError::Traversal {
                    id: target.to_string(),
                })?;
            if let Some(next) = self.enter(target, target_type) {
                stack.push(next);
            }
        }

        debug!(
            "Seed '{}' added {} nodes and {} edges",
            id,
            self.sample.node_count() - before.0,
            self.sample.edge_count() - before.1
        );
        Ok(())
    }

    /// Emit the node for `id` and open a frame over its interactions.
    ///
    /// Returns `None` if `id` was already visited. An id without a node
    /// record is not emitted (and not marked visited) but its bucket is
    /// still walked.
    fn enter(&mut self, id: &str, node_type: &str) -> Option<Frame<'i>> {
        if self.sample.is_visited(id) {
            return None;
        }
        let interactions: &'i InteractionIndex<'g> = self.interactions;
        match self.graph.node(id) {
            Some(node) => {
                self.sample.push_node(node);
            }
            None => warn!("Node '{}' has no record, walking its edges only", id),
        }
        Some(Frame {
            edges: interactions.interactions(node_type, id),
            cursor: 0,
        })
    }

    pub fn sample(&self) -> &SampledSubgraph {
        &self.sample
    }

    pub fn into_sample(self) -> SampledSubgraph {
        self.sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    fn ids(sample: &SampledSubgraph) -> Vec<&str> {
        sample.nodes().iter().map(|n| n.id.as_str()).collect()
    }

    fn pairs(sample: &SampledSubgraph) -> Vec<(&str, &str)> {
        sample
            .edges()
            .iter()
            .map(|e| (e.source_id(), e.target_id()))
            .collect()
    }

    #[test]
    fn test_single_edge_scenario() {
        let graph = GraphIndex::from_records(
            vec![Node::new("u1", "user_id"), Node::new("i1", "item_id")],
            vec![Edge::new("u1", "i1")],
        );
        let index = InteractionIndex::build(&graph);
        let mut expander = SubgraphExpander::new(&graph, &index);
        expander.expand("u1", "user_id").unwrap();

        let sample = expander.into_sample();
        assert_eq!(ids(&sample), vec!["u1", "i1"]);
        assert_eq!(sample.edges(), &[Edge::new("u1", "i1")]);
    }

    #[test]
    fn test_depth_first_order_matches_recursive_walk() {
        // a -> b, a -> c, b -> d, d -> c
        // Recursive order: a, b (edge a->b), d (edge b->d), c (edge d->c),
        // then back at a: edge a->c is emitted, c already visited.
        let graph = GraphIndex::from_records(
            vec![
                Node::new("a", "user_id"),
                Node::new("b", "item_id"),
                Node::new("c", "item_id"),
                Node::new("d", "tag_id"),
            ],
            vec![
                Edge::new("a", "b"),
                Edge::new("a", "c"),
                Edge::new("b", "d"),
                Edge::new("d", "c"),
            ],
        );
        let index = InteractionIndex::build(&graph);
        let mut expander = SubgraphExpander::new(&graph, &index);
        expander.expand("a", "user_id").unwrap();

        let sample = expander.into_sample();
        assert_eq!(ids(&sample), vec!["a", "b", "d", "c"]);
        assert_eq!(
            pairs(&sample),
            vec![("a", "b"), ("b", "d"), ("d", "c"), ("a", "c")]
        );
    }

    #[test]
    fn test_cycles_terminate() {
        let graph = GraphIndex::from_records(
            vec![Node::new("u1", "user_id"), Node::new("i1", "item_id")],
            vec![Edge::new("u1", "i1"), Edge::new("i1", "u1")],
        );
        let index = InteractionIndex::build(&graph);
        let mut expander = SubgraphExpander::new(&graph, &index);
        expander.expand("u1", "user_id").unwrap();

        let sample = expander.into_sample();
        assert_eq!(ids(&sample), vec!["u1", "i1"]);
        assert_eq!(pairs(&sample), vec![("u1", "i1"), ("i1", "u1")]);
    }

    #[test]
    fn test_shared_visited_across_seeds() {
        let graph = GraphIndex::from_records(
            vec![
                Node::new("u1", "user_id"),
                Node::new("u2", "user_id"),
                Node::new("i1", "item_id"),
            ],
            vec![Edge::new("u1", "i1"), Edge::new("u2", "i1")],
        );
        let index = InteractionIndex::build(&graph);
        let mut expander = SubgraphExpander::new(&graph, &index);
        expander.expand_all(&["u2", "u1", "u2"], "user_id").unwrap();

        let sample = expander.into_sample();
        assert_eq!(ids(&sample), vec!["u2", "i1", "u1"]);
        assert_eq!(pairs(&sample), vec![("u2", "i1"), ("u1", "i1")]);
    }

    #[test]
    fn test_duplicate_edges_emitted_once() {
        let graph = GraphIndex::from_records(
            vec![Node::new("u1", "user_id"), Node::new("i1", "item_id")],
            vec![Edge::new("u1", "i1"), Edge::new("u1", "i1")],
        );
        let index = InteractionIndex::build(&graph);
        let mut expander = SubgraphExpander::new(&graph, &index);
        expander.expand("u1", "user_id").unwrap();

        assert_eq!(expander.sample().edge_count(), 1);
    }

    #[test]
    fn test_dangling_target_is_traversal_error() {
        let graph = GraphIndex::from_records(
            vec![Node::new("u1", "user_id")],
            vec![Edge::new("u1", "ghost")],
        );
        let index = InteractionIndex::build(&graph);
        let mut expander = SubgraphExpander::new(&graph, &index);

        let err = expander.expand("u1", "user_id").unwrap_err();
        assert!(matches!(err, SamplerError::Traversal { ref id } if id == "ghost"));
    }

    #[test]
    fn test_unresolved_seed_walks_nothing_without_bucket() {
        let graph = GraphIndex::from_records(vec![Node::new("u1", "user_id")], vec![]);
        let index = InteractionIndex::build(&graph);
        let mut expander = SubgraphExpander::new(&graph, &index);
        expander.expand("ghost", "user_id").unwrap();

        assert!(expander.sample().is_empty());
        assert!(!expander.sample().is_visited("ghost"));
    }

    #[test]
    fn test_deep_chain_does_not_grow_call_stack() {
        let depth = 50_000;
        let nodes = (0..depth)
            .map(|n| Node::new(&format!("n{}", n), "chain_id"))
            .collect();
        let edges = (1..depth)
            .map(|n| Edge::new(&format!("n{}", n - 1), &format!("n{}", n)))
            .collect();
        let graph = GraphIndex::from_records(nodes, edges);
        let index = InteractionIndex::build(&graph);
        let mut expander = SubgraphExpander::new(&graph, &index);
        expander.expand("n0", "chain_id").unwrap();

        assert_eq!(expander.sample().node_count(), depth);
        assert_eq!(expander.sample().edge_count(), depth - 1);
    }
}
