//! Undirected edge (coupler) between two lattice nodes.

use serde::{Deserialize, Serialize};
use super::NodeLabel;

/// An undirected edge. Endpoints are stored in sorted order so that
/// `Edge::new(a, b) == Edge::new(b, a)`.
///
/// Serialized as an endpoint pair; deserializing re-sorts the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(NodeLabel, NodeLabel)", into = "(NodeLabel, NodeLabel)")]
pub struct Edge {
    a: NodeLabel,
    b: NodeLabel,
}

impl Edge {
    pub fn new(x: impl Into<NodeLabel>, y: impl Into<NodeLabel>) -> Self {
        let (x, y) = (x.into(), y.into());
        if x <= y { Self { a: x, b: y } } else { Self { a: y, b: x } }
    }

    pub fn endpoints(&self) -> (NodeLabel, NodeLabel) {
        (self.a, self.b)
    }

    pub fn touches(&self, n: &NodeLabel) -> bool {
        self.a == *n || self.b == *n
    }

    /// The "other" end of the edge from the given node.
    pub fn other_node(&self, from: &NodeLabel) -> Option<NodeLabel> {
        if *from == self.a { Some(self.b) }
        else if *from == self.b { Some(self.a) }
        else { None }
    }
}

impl From<(NodeLabel, NodeLabel)> for Edge {
    fn from((a, b): (NodeLabel, NodeLabel)) -> Self {
        Edge::new(a, b)
    }
}

impl From<Edge> for (NodeLabel, NodeLabel) {
    fn from(e: Edge) -> Self {
        e.endpoints()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_is_unordered() {
        assert_eq!(Edge::new(3u64, 1u64), Edge::new(1u64, 3u64));
        let e = Edge::new(3u64, 1u64);
        assert_eq!(e.endpoints(), (NodeLabel::Int(1), NodeLabel::Int(3)));
        assert_eq!(e.other_node(&NodeLabel::Int(1)), Some(NodeLabel::Int(3)));
        assert_eq!(e.other_node(&NodeLabel::Int(2)), None);
    }

    #[test]
    fn test_deserialize_sorts_endpoints() {
        let e: Edge = serde_json::from_str(r#"[{"Int": 3}, {"Int": 1}]"#).unwrap();
        assert_eq!(e, Edge::new(1u64, 3u64));
        assert_eq!(serde_json::to_string(&e).unwrap(), r#"[{"Int":1},{"Int":3}]"#);
    }
}
