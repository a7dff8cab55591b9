//! Zephyr lattice indices and the linear ↔ lattice conversion.
//!
//! A Zephyr lattice with `m` rows and tile width `t` has `4·t·m·(2m+1)`
//! nodes. Each node is addressed by a 5-tuple `(u, w, k, j, z)`:
//!
//! | Field | Range | Meaning |
//! |-------|-------|---------|
//! | `u` | `0..2` | orientation |
//! | `w` | `0..2m+1` | major perpendicular offset |
//! | `k` | `0..t` | secondary perpendicular offset |
//! | `j` | `0..2` | minor perpendicular offset |
//! | `z` | `0..m` | parallel offset |
//!
//! Linear labels enumerate the same nodes in `u, w, k, j, z` major-to-minor
//! order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Value;
use crate::{Error, Result};

/// Default tile width of a Zephyr lattice.
pub const DEFAULT_TILE: usize = 4;

/// Logical position of a node in the Zephyr tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZephyrIndex {
    pub u: usize,
    pub w: usize,
    pub k: usize,
    pub j: usize,
    pub z: usize,
}

impl ZephyrIndex {
    pub const fn new(u: usize, w: usize, k: usize, j: usize, z: usize) -> Self {
        Self { u, w, k, j, z }
    }

    /// Read an index stored as a 5-element integer list attribute.
    pub fn from_value(value: &Value) -> Result<Self> {
        let items = value.as_list().ok_or_else(|| Error::TypeError {
            expected: "LIST of 5 integers".into(),
            got: value.type_name().into(),
        })?;
        if items.len() != 5 {
            return Err(Error::InvalidIndex(format!(
                "expected 5 components, got {}",
                items.len()
            )));
        }

        let mut parts = [0usize; 5];
        for (slot, item) in parts.iter_mut().zip(items) {
            let n = item.as_int().ok_or_else(|| Error::TypeError {
                expected: "INTEGER".into(),
                got: item.type_name().into(),
            })?;
            *slot = usize::try_from(n)
                .map_err(|_| Error::InvalidIndex(format!("negative component {n} in {value}")))?;
        }

        let [u, w, k, j, z] = parts;
        Ok(Self { u, w, k, j, z })
    }

    pub fn to_value(&self) -> Value {
        Value::from(vec![self.u, self.w, self.k, self.j, self.z])
    }
}

impl From<(usize, usize, usize, usize, usize)> for ZephyrIndex {
    fn from((u, w, k, j, z): (usize, usize, usize, usize, usize)) -> Self {
        Self { u, w, k, j, z }
    }
}

impl fmt::Display for ZephyrIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {}, {})", self.u, self.w, self.k, self.j, self.z)
    }
}

// ============================================================================
// ZephyrCoordinates
// ============================================================================

/// Converts between linear node labels and [`ZephyrIndex`] for a lattice
/// of `rows` rows and tile width `tile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZephyrCoordinates {
    rows: usize,
    tile: usize,
    node_count: u64,
}

impl ZephyrCoordinates {
    pub fn new(rows: usize, tile: usize) -> Result<Self> {
        if rows == 0 || tile == 0 {
            return Err(Error::ConfigError(format!(
                "zephyr lattice needs positive rows and tile, got rows={rows} tile={tile}"
            )));
        }
        let (m, t) = (rows as u64, tile as u64);
        let node_count = m
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .and_then(|n| n.checked_mul(m))
            .and_then(|n| n.checked_mul(t))
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                Error::ConfigError(format!(
                    "zephyr lattice with rows={rows} tile={tile} has too many nodes to label"
                ))
            })?;
        Ok(Self { rows, tile, node_count })
    }

    /// Number of nodes in the full lattice.
    pub fn node_count(&self) -> u64 {
        self.node_count
    }

    /// Whether `q` lies inside this lattice.
    pub fn contains(&self, q: &ZephyrIndex) -> bool {
        q.u < 2 && q.w < 2 * self.rows + 1 && q.k < self.tile && q.j < 2 && q.z < self.rows
    }

    pub fn linear_to_zephyr(&self, r: u64) -> Result<ZephyrIndex> {
        if r >= self.node_count() {
            return Err(Error::InvalidIndex(format!(
                "linear label {r} outside lattice of {} nodes",
                self.node_count()
            )));
        }
        let m = self.rows as u64;
        let t = self.tile as u64;

        let (r, z) = (r / m, r % m);
        let (r, j) = (r / 2, r % 2);
        let (r, k) = (r / t, r % t);
        let (u, w) = (r / (2 * m + 1), r % (2 * m + 1));

        Ok(ZephyrIndex::new(u as usize, w as usize, k as usize, j as usize, z as usize))
    }

    pub fn zephyr_to_linear(&self, q: &ZephyrIndex) -> Result<u64> {
        if !self.contains(q) {
            return Err(Error::InvalidIndex(format!(
                "{q} outside lattice with rows={} tile={}",
                self.rows, self.tile
            )));
        }
        let m = self.rows as u64;
        let t = self.tile as u64;
        let (u, w, k, j, z) = (q.u as u64, q.w as u64, q.k as u64, q.j as u64, q.z as u64);
        Ok((((u * (2 * m + 1) + w) * t + k) * 2 + j) * m + z)
    }
}
