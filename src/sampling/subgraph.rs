use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::{Edge, Node};

/// Induced subgraph accumulated by one sampling run
///
/// Append only. `visited` holds the ids of every emitted node and is the
/// only membership test used during expansion. Edges are deduplicated by
/// full structural equality, compared only against edges with the same
/// endpoints.
#[derive(Debug, Clone, Default)]
pub struct SampledSubgraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    visited: FxHashSet<String>,
    /// (source, target) -> positions in `edges`
    edge_slots: FxHashMap<(String, String), Vec<usize>>,
}

impl SampledSubgraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from previously persisted arrays.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let visited = nodes.iter().map(|n| n.id.clone()).collect();
        let mut edge_slots: FxHashMap<(String, String), Vec<usize>> = FxHashMap::default();
        for (pos, edge) in edges.iter().enumerate() {
            edge_slots.entry(endpoints(edge)).or_default().push(pos);
        }
        Self {
            nodes,
            edges,
            visited,
            edge_slots,
        }
    }

    pub fn is_visited(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    /// Emit `node` and mark it visited. Returns false if it was already present.
    pub fn push_node(&mut self, node: &Node) -> bool {
        if !self.visited.insert(node.id.clone()) {
            return false;
        }
        self.nodes.push(node.clone());
        true
    }

    /// Emit `edge` unless a structurally equal edge is already present.
    pub fn push_edge(&mut self, edge: &Edge) -> bool {
        let slots = self.edge_slots.entry(endpoints(edge)).or_default();
        if slots.iter().any(|&pos| self.edges[pos] == *edge) {
            return false;
        }
        slots.push(self.edges.len());
        self.edges.push(edge.clone());
        true
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
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

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn endpoints(edge: &Edge) -> (String, String) {
    (edge.source_id().to_string(), edge.target_id().to_string())
}
