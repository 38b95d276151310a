//! Interaction graph loaded from a dataset directory
//!
//! Everything here is read-only after construction.

pub mod index;
pub mod interactions;
pub mod models;

pub use index::{GraphIndex, EDGE_FILE, NODE_FILE};
pub use interactions::{InteractionIndex, Interactions, TypeBucket};
pub use models::{Edge, Endpoint, Node};
