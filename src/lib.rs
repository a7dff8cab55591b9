//! # zephyr-layout — Zephyr Lattice Node Placement
//!
//! Computes plot coordinates for the nodes of a Zephyr lattice graph, the
//! topology of a family of quantum-annealing processors, and hands them to a
//! pluggable drawer.
//!
//! ## Design Principles
//!
//! 1. **Pure placement**: `NodePlacer` maps a 5-tuple lattice index to a point, nothing else
//! 2. **Typed metadata**: graph attributes are read into `GraphMetadata`, not looked up ad hoc
//! 3. **Enum dispatch**: `IndexSource` picks how a node's index is found, once per graph
//! 4. **Trait-first drawing**: `QubitDrawer` is the only contact with rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use zephyr_layout::{
//!     GraphMetadata, LabelingMode, LatticeGraph, LayoutOptions, Node, ZephyrIndex,
//!     zephyr_layout,
//! };
//!
//! # fn example() -> zephyr_layout::Result<()> {
//! let mut graph = LatticeGraph::new(GraphMetadata::zephyr(2, 4, LabelingMode::Coordinate));
//! graph.add_node(Node::new(ZephyrIndex::new(1, 0, 0, 0, 0)));
//!
//! let pos = zephyr_layout(&graph, &LayoutOptions::default())?;
//! assert_eq!(pos.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod coordinates;
pub mod layout;
pub mod draw;
pub mod export;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Node, NodeLabel, Edge, LatticeGraph, GraphMetadata, LabelingMode,
    Value, PropertyMap, ZEPHYR_FAMILY, ZEPHYR_INDEX_KEY,
};

pub use coordinates::{ZephyrIndex, ZephyrCoordinates, DEFAULT_TILE};

// ============================================================================
// Re-exports: Layout
// ============================================================================

pub use layout::{
    LayoutOptions, NodePlacer, IndexSource, Point, PositionMap,
    zephyr_layout, zephyr_node_placer,
};

// ============================================================================
// Re-exports: Drawing
// ============================================================================

pub use draw::{
    QubitDrawer, ZephyrGenerator, LatticeSpec, DrawStyle, Embedding,
    draw_zephyr, draw_zephyr_embedding, draw_zephyr_yield,
};

pub use export::{positions_to_json, export_positions};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid zephyr index: {0}")]
    InvalidIndex(String),

    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
