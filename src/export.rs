//! Layout export — serialize a position map as JSON.
//!
//! ```text
//! zephyr_layout() → PositionMap → positions_to_json() → {"(0, 0, 0, 0, 0)": [x, y], ...}
//! ```
//!
//! Keys are the display form of each node label and are written in sorted
//! label order so the output is stable across runs.

use std::io::Write;

use serde_json::{Map, Value as Json};

use crate::layout::PositionMap;
use crate::Result;

/// Convert a position map to a JSON object keyed by node label.
pub fn positions_to_json(pos: &PositionMap) -> Json {
    let mut labels: Vec<_> = pos.keys().collect();
    labels.sort();

    let mut out = Map::with_capacity(labels.len());
    for label in labels {
        let coords = pos[label].iter().copied().map(Json::from).collect();
        out.insert(label.to_string(), Json::Array(coords));
    }
    Json::Object(out)
}

/// Write a position map as pretty-printed JSON.
pub fn export_positions(pos: &PositionMap, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &positions_to_json(pos))?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::ZephyrIndex;
    use crate::model::NodeLabel;
    use smallvec::smallvec;

    #[test]
    fn test_positions_to_json() {
        let mut pos = PositionMap::new();
        pos.insert(NodeLabel::Int(2), smallvec![0.5, -0.25]);
        pos.insert(NodeLabel::Int(1), smallvec![1.0, 0.0]);

        let json = positions_to_json(&pos);
        assert_eq!(json, serde_json::json!({"1": [1.0, 0.0], "2": [0.5, -0.25]}));
    }

    #[test]
    fn test_coordinate_keys() {
        let mut pos = PositionMap::new();
        pos.insert(ZephyrIndex::new(1, 0, 0, 0, 0).into(), smallvec![0.0, 0.0, 3.0]);
        let json = positions_to_json(&pos);
        assert_eq!(json["(1, 0, 0, 0, 0)"], serde_json::json!([0.0, 0.0, 3.0]));
    }

    #[test]
    fn test_export_positions() {
        let mut pos = PositionMap::new();
        pos.insert(NodeLabel::Int(0), smallvec![0.125, -0.5]);
        let mut buf = Vec::new();
        export_positions(&pos, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        let back: Json = serde_json::from_str(&text).unwrap();
        assert_eq!(back["0"], serde_json::json!([0.125, -0.5]));
    }
}
