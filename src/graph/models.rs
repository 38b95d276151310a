use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node record from `node.json`
///
/// Fields other than `id` and `type` are kept verbatim in `attrs` and
/// written back in their original order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl Node {
    pub fn new(id: &str, node_type: &str) -> Self {
        Self {
            id: id.to_string(),
            node_type: node_type.to_string(),
            attrs: Map::new(),
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }
}

/// One end of an edge: `{"data": "<node id>", ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    pub data: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Endpoint {
    pub fn new(id: &str) -> Self {
        Self {
            data: id.to_string(),
            extra: Map::new(),
        }
    }
}

/// A directed edge record from `edge.json`
///
/// Equality is structural over every field, which is what sample dedup
/// relies on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    pub source: Endpoint,
    pub target: Endpoint,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl Edge {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: Endpoint::new(source),
            target: Endpoint::new(target),
            attrs: Map::new(),
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    pub fn source_id(&self) -> &str {
        &self.source.data
    }

    pub fn target_id(&self) -> &str {
        &self.target.data
    }
}
