//! # Zephyr Layout
//!
//! Positions every node of a Zephyr graph in the plane (or in `dim`
//! dimensions, with the extra axes left at the center).
//!
//! ```text
//! LatticeGraph ── IndexSource ──► ZephyrIndex ── NodePlacer ──► Point
//! ```
//!
//! The placer is a pure function of the index and the [`LayoutOptions`];
//! the builder only decides how each node's index is found.

pub mod placer;
pub mod resolve;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::{LatticeGraph, NodeLabel};
use crate::{Error, Result};

pub use placer::{NodePlacer, Point};
pub use resolve::IndexSource;

/// Node positions keyed by node label.
pub type PositionMap = HashMap<NodeLabel, Point>;

// ============================================================================
// Layout options
// ============================================================================

/// Scale, anchor and dimension of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Multiplier applied after normalizing by `rows * tile`.
    pub scale: f64,
    /// Top left corner. Defaults to the origin.
    pub center: Option<Vec<f64>>,
    /// Number of dimensions, at least 2.
    pub dim: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { scale: 1.0, center: None, dim: 2 }
    }
}

impl LayoutOptions {
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_center(mut self, center: impl Into<Vec<f64>>) -> Self {
        self.center = Some(center.into());
        self
    }

    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }
}

// ============================================================================
// Builders
// ============================================================================

fn ensure_zephyr(graph: &LatticeGraph) -> Result<()> {
    if graph.is_zephyr() {
        Ok(())
    } else {
        Err(Error::ValidationError(
            "G must be generated by the zephyr graph constructor".into(),
        ))
    }
}

/// Node placer for a Zephyr graph, sized from its metadata.
pub fn zephyr_node_placer(graph: &LatticeGraph, opts: &LayoutOptions) -> Result<NodePlacer> {
    ensure_zephyr(graph)?;
    NodePlacer::for_graph(graph, opts)
}

/// Position every node of a Zephyr graph (or subgraph of one).
///
/// Fails without producing positions if the graph is not Zephyr-tagged, the
/// options are invalid, or any node's index cannot be resolved.
pub fn zephyr_layout(graph: &LatticeGraph, opts: &LayoutOptions) -> Result<PositionMap> {
    let placer = zephyr_node_placer(graph, opts)?;
    let source = IndexSource::for_graph(graph)?;

    tracing::debug!(
        nodes = graph.node_count(),
        source = source.name(),
        dim = opts.dim,
        scale = opts.scale,
        "computing zephyr layout"
    );

    graph
        .nodes()
        .map(|node| {
            let q = source.resolve(node)?;
            Ok((node.label, placer.place(&q)))
        })
        .collect()
}
