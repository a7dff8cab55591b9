//! LatticeGraph — an undirected graph tagged with lattice metadata.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Edge, GraphMetadata, Node, NodeLabel};

/// An undirected graph over lattice nodes, with the metadata its
/// constructor attached.
///
/// Node and edge iteration order is unspecified. Serialized form lists
/// nodes and edges as sequences, since labels are not string keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatticeGraph {
    pub metadata: GraphMetadata,
    #[serde(with = "node_seq")]
    nodes: HashMap<NodeLabel, Node>,
    edges: HashSet<Edge>,
}

/// Node store as a flat list; each node carries its own label.
mod node_seq {
    use super::*;

    pub fn serialize<S: Serializer>(
        nodes: &HashMap<NodeLabel, Node>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(nodes.values())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<NodeLabel, Node>, D::Error> {
        let nodes = Vec::<Node>::deserialize(deserializer)?;
        Ok(nodes.into_iter().map(|n| (n.label, n)).collect())
    }
}

impl LatticeGraph {
    pub fn new(metadata: GraphMetadata) -> Self {
        Self {
            metadata,
            nodes: HashMap::new(),
            edges: HashSet::new(),
        }
    }

    pub fn is_zephyr(&self) -> bool {
        self.metadata.is_zephyr()
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Insert a node, replacing any existing node with the same label.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.label, node);
    }

    /// Remove a node and every edge incident to it. Returns the node if it existed.
    pub fn remove_node(&mut self, label: &NodeLabel) -> Option<Node> {
        let node = self.nodes.remove(label)?;
        self.edges.retain(|e| !e.touches(label));
        Some(node)
    }

    pub fn node(&self, label: &NodeLabel) -> Option<&Node> {
        self.nodes.get(label)
    }

    pub fn has_node(&self, label: &NodeLabel) -> bool {
        self.nodes.contains_key(label)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Insert an edge. Missing endpoints are added as bare nodes.
    pub fn add_edge(&mut self, a: impl Into<NodeLabel>, b: impl Into<NodeLabel>) {
        let (a, b) = (a.into(), b.into());
        self.nodes.entry(a).or_insert_with(|| Node::new(a));
        self.nodes.entry(b).or_insert_with(|| Node::new(b));
        self.edges.insert(Edge::new(a, b));
    }

    pub fn remove_edge(&mut self, a: impl Into<NodeLabel>, b: impl Into<NodeLabel>) -> bool {
        self.edges.remove(&Edge::new(a, b))
    }

    pub fn has_edge(&self, a: impl Into<NodeLabel>, b: impl Into<NodeLabel>) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
