//! Maps Zephyr lattice indices to plot coordinates.

use smallvec::{SmallVec, smallvec};

use super::LayoutOptions;
use crate::coordinates::ZephyrIndex;
use crate::model::LatticeGraph;
use crate::{Error, Result};

/// A point in layout space, `dim` coordinates long.
pub type Point = SmallVec<[f64; 3]>;

/// Pure function from [`ZephyrIndex`] to a layout point.
///
/// The requested scale is divided by `rows * tile`, so lattices of any size
/// span a comparable extent. The lattice extends right and down from
/// `center` (its top left corner). Extra dimensions beyond the first two are
/// zero before translation.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePlacer {
    tile: f64,
    /// Requested scale divided by `rows * tile`.
    scale: f64,
    center: Point,
}

impl NodePlacer {
    pub fn new(rows: usize, tile: usize, opts: &LayoutOptions) -> Result<Self> {
        if rows == 0 || tile == 0 {
            return Err(Error::ConfigError(format!(
                "zephyr lattice needs positive rows and tile, got rows={rows} tile={tile}"
            )));
        }
        if opts.dim < 2 {
            return Err(Error::ConfigError("layout must have at least two dimensions".into()));
        }

        let center: Point = match &opts.center {
            Some(c) if c.len() != opts.dim => {
                return Err(Error::ConfigError(
                    "length of center coordinates must match dimension of layout".into(),
                ));
            }
            Some(c) => c.iter().copied().collect(),
            None => smallvec![0.0; opts.dim],
        };

        Ok(Self {
            tile: tile as f64,
            scale: opts.scale / (rows as f64 * tile as f64),
            center,
        })
    }

    /// Build a placer from the `rows` and `tile` attributes of `graph`.
    pub fn for_graph(graph: &LatticeGraph, opts: &LayoutOptions) -> Result<Self> {
        let rows = graph
            .metadata
            .rows
            .ok_or_else(|| Error::ConfigError("graph metadata is missing 'rows'".into()))?;
        let tile = graph
            .metadata
            .tile
            .ok_or_else(|| Error::ConfigError("graph metadata is missing 'tile'".into()))?;
        Self::new(rows, tile, opts)
    }

    pub fn dim(&self) -> usize {
        self.center.len()
    }

    pub fn place(&self, q: &ZephyrIndex) -> Point {
        let t = self.tile;
        let (w, k, j, z) = (q.w as f64, q.k as f64, q.j as f64, q.z as f64);

        // perpendicular and parallel offsets
        let perp = 2.0 * t * w + 2.0 * k + 0.625 * j + 0.125;
        let par = (2.0 * z + j + 1.0) * 2.0 * t - 0.5;

        let (x, y) = if q.u != 0 { (perp, -par) } else { (par, -perp) };

        let mut p = self.center.clone();
        p[0] += x * self.scale;
        p[1] += y * self.scale;
        p
    }
}
