//! Typed graph-level attributes.
//!
//! Lattice constructors tag a graph with a handful of attributes: its
//! family, size parameters and labeling scheme. `GraphMetadata` is the typed
//! form of that attribute dict. Size fields are optional because subgraphs
//! and hand-built graphs may not carry them; consumers that need them fail
//! with a configuration error naming what is missing.

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};
use crate::{Error, Result};

/// Family tag set by the Zephyr graph constructor.
pub const ZEPHYR_FAMILY: &str = "zephyr";

/// How nodes of a lattice graph are labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelingMode {
    /// Linear integer labels.
    Int,
    /// Nodes are labeled by their 5-tuple lattice index.
    Coordinate,
}

impl LabelingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelingMode::Int => "int",
            LabelingMode::Coordinate => "coordinate",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "int" => Ok(LabelingMode::Int),
            "coordinate" => Ok(LabelingMode::Coordinate),
            other => Err(Error::ConfigError(format!("unknown labeling mode '{other}'"))),
        }
    }
}

/// Graph attributes attached at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphMetadata {
    pub family: String,
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub tile: Option<usize>,
    pub labels: Option<LabelingMode>,
    /// Nodes carry their lattice index in the `zephyr_index` attribute.
    pub data: bool,
    pub fabric_only: Option<bool>,
}

impl GraphMetadata {
    /// Metadata as a Zephyr constructor attaches it to an `m`-row lattice
    /// with tile width `t`.
    pub fn zephyr(m: usize, t: usize, labels: LabelingMode) -> Self {
        Self {
            family: ZEPHYR_FAMILY.to_owned(),
            rows: Some(m),
            columns: Some(m),
            tile: Some(t),
            labels: Some(labels),
            data: true,
            fabric_only: None,
        }
    }

    pub fn with_data(mut self, data: bool) -> Self {
        self.data = data;
        self
    }

    pub fn with_fabric_only(mut self, fabric_only: bool) -> Self {
        self.fabric_only = Some(fabric_only);
        self
    }

    pub fn is_zephyr(&self) -> bool {
        self.family == ZEPHYR_FAMILY
    }

    /// Read metadata from a dynamic attribute dict.
    ///
    /// Absent or null attributes stay unset; present attributes of the wrong
    /// type are an error.
    pub fn from_properties(props: &PropertyMap) -> Result<Self> {
        let family = match present(props, "family") {
            Some(v) => v
                .as_str()
                .ok_or_else(|| type_error("STRING", v))?
                .to_owned(),
            None => String::new(),
        };
        let labels = match present(props, "labels") {
            Some(v) => Some(LabelingMode::parse(
                v.as_str().ok_or_else(|| type_error("STRING", v))?,
            )?),
            None => None,
        };
        let fabric_only = match present(props, "fabric_only") {
            Some(v) => Some(v.as_bool().ok_or_else(|| type_error("BOOLEAN", v))?),
            None => None,
        };

        Ok(Self {
            family,
            rows: read_size(props, "rows")?,
            columns: read_size(props, "columns")?,
            tile: read_size(props, "tile")?,
            labels,
            data: present(props, "data").is_some_and(Value::is_truthy),
            fabric_only,
        })
    }

    /// The inverse of [`from_properties`](Self::from_properties).
    pub fn to_properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new();
        props.insert("family".into(), Value::from(self.family.as_str()));
        props.insert("rows".into(), Value::from(self.rows));
        props.insert("columns".into(), Value::from(self.columns));
        props.insert("tile".into(), Value::from(self.tile));
        props.insert("labels".into(), Value::from(self.labels.map(|l| l.as_str())));
        props.insert("data".into(), Value::from(self.data));
        props.insert("fabric_only".into(), Value::from(self.fabric_only));
        props
    }
}

fn present<'a>(props: &'a PropertyMap, key: &str) -> Option<&'a Value> {
    props.get(key).filter(|v| !v.is_null())
}

fn read_size(props: &PropertyMap, key: &str) -> Result<Option<usize>> {
    let Some(v) = present(props, key) else {
        return Ok(None);
    };
    let n = v.as_int().ok_or_else(|| type_error("INTEGER", v))?;
    usize::try_from(n)
        .map(Some)
        .map_err(|_| Error::ConfigError(format!("graph attribute '{key}' must be non-negative, got {n}")))
}

fn type_error(expected: &str, got: &Value) -> Error {
    Error::TypeError {
        expected: expected.into(),
        got: got.type_name().into(),
    }
}
