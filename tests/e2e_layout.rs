//! End-to-end tests for Zephyr layouts.
//!
//! Builds full lattices under each labeling scheme and checks that every
//! scheme places the same lattice node at the same point.

use pretty_assertions::assert_eq;
use zephyr_layout::{
    DEFAULT_TILE, Error, GraphMetadata, LabelingMode, LatticeGraph, LayoutOptions, Node,
    NodeLabel, ZephyrCoordinates, ZephyrIndex, export_positions, zephyr_layout,
    zephyr_node_placer,
};

// ============================================================================
// Helpers
// ============================================================================

#[derive(Clone, Copy)]
enum Scheme {
    Coordinate,
    IntWithData,
    IntOnly,
}

fn lattice(m: usize, t: usize, scheme: Scheme) -> LatticeGraph {
    let coords = ZephyrCoordinates::new(m, t).unwrap();
    let meta = match scheme {
        Scheme::Coordinate => GraphMetadata::zephyr(m, t, LabelingMode::Coordinate),
        Scheme::IntWithData => GraphMetadata::zephyr(m, t, LabelingMode::Int),
        Scheme::IntOnly => GraphMetadata::zephyr(m, t, LabelingMode::Int).with_data(false),
    };
    let mut g = LatticeGraph::new(meta);
    for r in 0..coords.node_count() {
        let q = coords.linear_to_zephyr(r).unwrap();
        let node = match scheme {
            Scheme::Coordinate => Node::new(q).with_zephyr_index(q),
            Scheme::IntWithData => Node::new(r).with_zephyr_index(q),
            Scheme::IntOnly => Node::new(r),
        };
        g.add_node(node);
    }
    g
}

// ============================================================================
// 1. Reference point for a 2-row lattice
// ============================================================================

#[test]
fn test_coordinate_labeled_origin_node() {
    let g = lattice(2, DEFAULT_TILE, Scheme::Coordinate);
    let pos = zephyr_layout(&g, &LayoutOptions::default()).unwrap();

    let t = DEFAULT_TILE as f64;
    let scale = 1.0 / (2.0 * t);
    let label = NodeLabel::from(ZephyrIndex::new(1, 0, 0, 0, 0));
    assert_eq!(pos[&label].as_slice(), &[0.125 * scale, -(2.0 * t - 0.5) * scale]);
}

// ============================================================================
// 2. Every labeling scheme agrees
// ============================================================================

#[test]
fn test_labeling_schemes_agree() {
    let (m, t) = (3, 2);
    let coords = ZephyrCoordinates::new(m, t).unwrap();
    let opts = LayoutOptions::default().with_scale(2.5).with_center(vec![1.0, -1.0]);

    let by_coord = zephyr_layout(&lattice(m, t, Scheme::Coordinate), &opts).unwrap();
    let by_data = zephyr_layout(&lattice(m, t, Scheme::IntWithData), &opts).unwrap();
    let by_linear = zephyr_layout(&lattice(m, t, Scheme::IntOnly), &opts).unwrap();

    assert_eq!(by_coord.len() as u64, coords.node_count());
    assert_eq!(by_data.len(), by_coord.len());
    assert_eq!(by_linear.len(), by_coord.len());

    for r in 0..coords.node_count() {
        let q = coords.linear_to_zephyr(r).unwrap();
        let expected = &by_coord[&NodeLabel::from(q)];
        assert_eq!(&by_data[&NodeLabel::Int(r)], expected, "data label {r}");
        assert_eq!(&by_linear[&NodeLabel::Int(r)], expected, "linear label {r}");
    }
}

// ============================================================================
// 3. The lattice hangs right and down from the center
// ============================================================================

#[test]
fn test_layout_extends_from_top_left_corner() {
    let g = lattice(4, DEFAULT_TILE, Scheme::Coordinate);
    let pos = zephyr_layout(&g, &LayoutOptions::default().with_center(vec![2.0, 3.0])).unwrap();
    for p in pos.values() {
        assert!(p[0] > 2.0, "x left of corner: {p:?}");
        assert!(p[1] < 3.0, "y above corner: {p:?}");
    }
}

// ============================================================================
// 4. Subgraphs only get positions for the nodes they have
// ============================================================================

#[test]
fn test_subgraph_layout() {
    let mut g = lattice(2, DEFAULT_TILE, Scheme::IntOnly);
    let full = zephyr_layout(&g, &LayoutOptions::default()).unwrap();

    g.remove_node(&NodeLabel::Int(5));
    g.remove_node(&NodeLabel::Int(77));
    let sub = zephyr_layout(&g, &LayoutOptions::default()).unwrap();

    assert_eq!(sub.len(), full.len() - 2);
    assert!(!sub.contains_key(&NodeLabel::Int(5)));
    assert_eq!(sub[&NodeLabel::Int(6)], full[&NodeLabel::Int(6)]);
}

// ============================================================================
// 5. Errors
// ============================================================================

#[test]
fn test_non_zephyr_graph_is_validation_error() {
    let mut g = lattice(1, 2, Scheme::IntOnly);
    g.metadata.family = "chimera".into();
    let err = zephyr_layout(&g, &LayoutOptions::default()).unwrap_err();
    assert!(
        matches!(err, Error::ValidationError(ref m) if m.contains("zephyr graph constructor")),
        "got {err:?}"
    );
}

#[test]
fn test_dimension_errors_surface_through_layout() {
    let g = lattice(1, 2, Scheme::Coordinate);
    for dim in [0, 1] {
        let err = zephyr_layout(&g, &LayoutOptions::default().with_dim(dim)).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)), "dim {dim}: {err:?}");
    }

    let err = zephyr_layout(&g, &LayoutOptions::default().with_dim(3).with_center(vec![0.0, 0.0]))
        .unwrap_err();
    assert!(matches!(err, Error::ConfigError(ref m) if m.contains("length of center")));
}

#[test]
fn test_missing_rows_is_config_error() {
    let mut g = lattice(1, 2, Scheme::Coordinate);
    g.metadata.rows = None;
    assert!(matches!(
        zephyr_node_placer(&g, &LayoutOptions::default()),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_linear_label_out_of_range() {
    let mut g = lattice(1, 2, Scheme::IntOnly);
    g.add_node(Node::new(24u64));
    assert!(matches!(
        zephyr_layout(&g, &LayoutOptions::default()),
        Err(Error::InvalidIndex(_))
    ));
}

#[test]
fn test_huge_lattice_metadata() {
    let (m, t) = (1usize << 40, 1usize << 40);
    let mut g = LatticeGraph::new(GraphMetadata::zephyr(m, t, LabelingMode::Int).with_data(false));
    g.add_node(Node::new(0u64));
    assert!(matches!(
        zephyr_layout(&g, &LayoutOptions::default()),
        Err(Error::ConfigError(_))
    ));

    // Coordinate labels need no linear conversion, so the layout still works.
    let q = ZephyrIndex::new(1, 0, 0, 0, 0);
    let mut g = LatticeGraph::new(GraphMetadata::zephyr(m, t, LabelingMode::Coordinate));
    g.add_node(Node::new(q));
    let pos = zephyr_layout(&g, &LayoutOptions::default()).unwrap();
    assert!(pos[&NodeLabel::from(q)].iter().all(|c| c.is_finite()));
}

// ============================================================================
// 6. Three-dimensional layout and export
// ============================================================================

#[test]
fn test_three_dimensional_export() {
    let mut g = LatticeGraph::new(GraphMetadata::zephyr(2, DEFAULT_TILE, LabelingMode::Coordinate));
    g.add_edge(ZephyrIndex::new(0, 0, 0, 0, 0), ZephyrIndex::new(0, 0, 0, 0, 1));

    let opts = LayoutOptions::default().with_dim(3).with_center(vec![0.0, 0.0, 5.0]);
    let pos = zephyr_layout(&g, &opts).unwrap();
    assert_eq!(pos.len(), 2);
    assert!(pos.values().all(|p| p.len() == 3 && p[2] == 5.0));

    let mut buf = Vec::new();
    export_positions(&pos, &mut buf).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(json["(0, 0, 0, 0, 0)"], serde_json::json!([7.5 / 8.0, -0.125 / 8.0, 5.0]));
}
