//! Node in a lattice graph.

use std::fmt;

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};
use crate::coordinates::ZephyrIndex;

/// Per-node attribute holding the node's lattice index.
pub const ZEPHYR_INDEX_KEY: &str = "zephyr_index";

/// Node identifier, in whichever labeling scheme the graph was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeLabel {
    /// Linear integer label.
    Int(u64),
    /// The lattice index itself.
    Coordinate(ZephyrIndex),
}

impl From<u64> for NodeLabel {
    fn from(v: u64) -> Self { NodeLabel::Int(v) }
}

impl From<ZephyrIndex> for NodeLabel {
    fn from(q: ZephyrIndex) -> Self { NodeLabel::Coordinate(q) }
}

impl From<(usize, usize, usize, usize, usize)> for NodeLabel {
    fn from(t: (usize, usize, usize, usize, usize)) -> Self { NodeLabel::Coordinate(t.into()) }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Int(i) => write!(f, "{i}"),
            NodeLabel::Coordinate(q) => write!(f, "{q}"),
        }
    }
}

/// A node of a lattice graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub label: NodeLabel,
    pub properties: PropertyMap,
}

impl Node {
    pub fn new(label: impl Into<NodeLabel>) -> Self {
        Self {
            label: label.into(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Attach the lattice index as the `zephyr_index` attribute.
    pub fn with_zephyr_index(self, q: ZephyrIndex) -> Self {
        self.with_property(ZEPHYR_INDEX_KEY, q.to_value())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
