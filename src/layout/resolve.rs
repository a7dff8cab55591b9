//! Resolving each node's lattice index from the graph's labeling scheme.

use crate::coordinates::{ZephyrCoordinates, ZephyrIndex};
use crate::model::{LabelingMode, LatticeGraph, Node, NodeLabel, ZEPHYR_INDEX_KEY};
use crate::{Error, Result};

/// Where a node's [`ZephyrIndex`] comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSource {
    /// The node label is the index.
    Coordinate,
    /// The index is stored in the node's `zephyr_index` attribute.
    Attribute,
    /// The node label is linear and is converted back to an index.
    Linear(ZephyrCoordinates),
}

impl IndexSource {
    /// Pick the source for `graph`: coordinate labels first, then stored
    /// attributes, then linear conversion.
    pub fn for_graph(graph: &LatticeGraph) -> Result<Self> {
        let meta = &graph.metadata;
        if meta.labels == Some(LabelingMode::Coordinate) {
            return Ok(IndexSource::Coordinate);
        }
        if meta.data {
            return Ok(IndexSource::Attribute);
        }

        let rows = meta.rows.ok_or_else(|| {
            Error::ConfigError("linear labels need the 'rows' graph attribute".into())
        })?;
        let tile = meta.tile.ok_or_else(|| {
            Error::ConfigError("linear labels need the 'tile' graph attribute".into())
        })?;
        Ok(IndexSource::Linear(ZephyrCoordinates::new(rows, tile)?))
    }

    pub fn name(&self) -> &'static str {
        match self {
            IndexSource::Coordinate => "coordinate",
            IndexSource::Attribute => "attribute",
            IndexSource::Linear(_) => "linear",
        }
    }

    pub fn resolve(&self, node: &Node) -> Result<ZephyrIndex> {
        match (self, &node.label) {
            (IndexSource::Coordinate, NodeLabel::Coordinate(q)) => Ok(*q),
            (IndexSource::Coordinate, label) => Err(Error::InvalidIndex(format!(
                "node {label} is not a coordinate label"
            ))),
            (IndexSource::Attribute, label) => {
                let value = node.get(ZEPHYR_INDEX_KEY).ok_or_else(|| {
                    Error::InvalidIndex(format!("node {label} has no '{ZEPHYR_INDEX_KEY}' attribute"))
                })?;
                ZephyrIndex::from_value(value)
            }
            (IndexSource::Linear(coords), NodeLabel::Int(r)) => coords.linear_to_zephyr(*r),
            (IndexSource::Linear(_), label) => Err(Error::InvalidIndex(format!(
                "node {label} is not a linear label"
            ))),
        }
    }
}
