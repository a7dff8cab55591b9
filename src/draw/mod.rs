//! # Drawing Wrappers
//!
//! Thin entry points that lay out a Zephyr graph and hand the positions to a
//! [`QubitDrawer`]. This crate does no rendering of its own: colouring by
//! bias, chain display and fault highlighting all belong to the drawer.
//!
//! | Entry point | Drawer call |
//! |-------------|-------------|
//! | [`draw_zephyr`] | [`QubitDrawer::draw_qubit_graph`] |
//! | [`draw_zephyr_embedding`] | [`QubitDrawer::draw_embedding`] |
//! | [`draw_zephyr_yield`] | [`QubitDrawer::draw_yield`] |

use hashbrown::HashMap;

use crate::layout::{LayoutOptions, PositionMap, zephyr_layout};
use crate::model::{Edge, LabelingMode, LatticeGraph, NodeLabel, PropertyMap};
use crate::{Error, Result};

// ============================================================================
// Styling
// ============================================================================

/// Chains keyed by logical variable. Each chain is the set of lattice nodes
/// representing that variable.
pub type Embedding = HashMap<String, Vec<NodeLabel>>;

/// Styling handed through to the drawer untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawStyle {
    /// Node biases, visualized by the drawer when non-empty.
    pub linear_biases: HashMap<NodeLabel, f64>,
    /// Edge biases. `(a, b)` and `(b, a)` share one entry.
    pub quadratic_biases: HashMap<Edge, f64>,
    /// Drawer-specific options (colours, marker shapes, line styles, ...).
    pub options: PropertyMap,
}

impl DrawStyle {
    pub fn with_linear_bias(mut self, node: impl Into<NodeLabel>, bias: f64) -> Self {
        self.linear_biases.insert(node.into(), bias);
        self
    }

    pub fn with_quadratic_bias(
        mut self,
        a: impl Into<NodeLabel>,
        b: impl Into<NodeLabel>,
        bias: f64,
    ) -> Self {
        self.quadratic_biases.insert(Edge::new(a, b), bias);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<crate::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Collaborator traits
// ============================================================================

/// A generic qubit-graph drawer.
///
/// Implementations render to whatever target they own (a plotting backend,
/// an SVG writer, a test recorder). Failures are reported as
/// `Error::RenderError`.
pub trait QubitDrawer {
    /// Draw `graph` at `pos`, colouring by the style's biases if any.
    fn draw_qubit_graph(
        &mut self,
        graph: &LatticeGraph,
        pos: &PositionMap,
        style: &DrawStyle,
    ) -> Result<()>;

    /// Draw `graph` at `pos` with the chains of `embedding` highlighted.
    fn draw_embedding(
        &mut self,
        graph: &LatticeGraph,
        pos: &PositionMap,
        embedding: &Embedding,
        style: &DrawStyle,
    ) -> Result<()>;

    /// Draw `graph` against `perfect`, highlighting nodes and edges of
    /// `perfect` that are absent from `graph`. `pos` covers `perfect`.
    fn draw_yield(
        &mut self,
        graph: &LatticeGraph,
        pos: &PositionMap,
        perfect: &LatticeGraph,
        style: &DrawStyle,
    ) -> Result<()>;
}

/// Parameters for building a fault-free reference lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeSpec {
    pub rows: usize,
    pub tile: usize,
    /// Label nodes by coordinate instead of linear index.
    pub coordinates: bool,
    /// `None` when the source graph did not record it; the generator's own
    /// default applies.
    pub fabric_only: Option<bool>,
}

/// A Zephyr graph constructor.
pub trait ZephyrGenerator {
    fn zephyr_graph(&self, spec: &LatticeSpec) -> Result<LatticeGraph>;
}

// ============================================================================
// Entry points
// ============================================================================

/// Draw a Zephyr graph in its lattice layout.
pub fn draw_zephyr<D: QubitDrawer + ?Sized>(
    graph: &LatticeGraph,
    drawer: &mut D,
    style: &DrawStyle,
) -> Result<()> {
    let pos = zephyr_layout(graph, &LayoutOptions::default())?;
    tracing::debug!(nodes = pos.len(), "drawing zephyr graph");
    drawer.draw_qubit_graph(graph, &pos, style)
}

/// Draw an embedding onto a Zephyr graph.
pub fn draw_zephyr_embedding<D: QubitDrawer + ?Sized>(
    graph: &LatticeGraph,
    drawer: &mut D,
    embedding: &Embedding,
    style: &DrawStyle,
) -> Result<()> {
    let pos = zephyr_layout(graph, &LayoutOptions::default())?;
    tracing::debug!(nodes = pos.len(), chains = embedding.len(), "drawing zephyr embedding");
    drawer.draw_embedding(graph, &pos, embedding, style)
}

/// Draw a Zephyr graph with its faults highlighted.
///
/// The reference lattice is rebuilt from the graph's `columns`, `tile` and
/// `labels` attributes. Graphs do not always record whether they were built
/// fabric-only; in that case the generator's default is used and the
/// reference may not match the original construction.
pub fn draw_zephyr_yield<G, D>(
    graph: &LatticeGraph,
    generator: &G,
    drawer: &mut D,
    style: &DrawStyle,
) -> Result<()>
where
    G: ZephyrGenerator + ?Sized,
    D: QubitDrawer + ?Sized,
{
    let spec = reference_spec(graph)?;
    if spec.fabric_only.is_none() {
        tracing::warn!(
            rows = spec.rows,
            tile = spec.tile,
            "graph does not record fabric_only; reference lattice uses the generator default"
        );
    }

    let perfect = generator.zephyr_graph(&spec)?;
    let pos = zephyr_layout(&perfect, &LayoutOptions::default())?;
    tracing::debug!(
        nodes = graph.node_count(),
        reference_nodes = perfect.node_count(),
        "drawing zephyr yield"
    );
    drawer.draw_yield(graph, &pos, &perfect, style)
}

fn reference_spec(graph: &LatticeGraph) -> Result<LatticeSpec> {
    let meta = &graph.metadata;
    let mut missing = Vec::new();
    if !meta.is_zephyr() {
        missing.push("family");
    }
    if meta.columns.is_none() {
        missing.push("columns");
    }
    if meta.tile.is_none() {
        missing.push("tile");
    }
    if meta.labels.is_none() {
        missing.push("labels");
    }

    match (meta.columns, meta.tile, meta.labels) {
        (Some(columns), Some(tile), Some(labels)) if missing.is_empty() => Ok(LatticeSpec {
            rows: columns,
            tile,
            coordinates: labels == LabelingMode::Coordinate,
            fabric_only: meta.fabric_only,
        }),
        _ => Err(Error::ConfigError(format!(
            "target zephyr graph needs family, columns, tile and labels attributes to identify \
             faulty qubits; missing or invalid: {}",
            missing.join(", ")
        ))),
    }
}
