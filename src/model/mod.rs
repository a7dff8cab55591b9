//! # Lattice Graph Model
//!
//! Plain data types for lattice graphs: nodes, edges, attribute values and
//! the typed graph metadata a lattice constructor attaches.
//!
//! This module is pure data — no I/O, no drawing.

pub mod node;
pub mod edge;
pub mod graph;
pub mod metadata;
pub mod value;
pub mod property_map;

pub use node::{Node, NodeLabel, ZEPHYR_INDEX_KEY};
pub use edge::Edge;
pub use graph::LatticeGraph;
pub use metadata::{GraphMetadata, LabelingMode, ZEPHYR_FAMILY};
pub use value::Value;
pub use property_map::{PropertyMap, property_map};
