//! Coordinate compression.
//!
//! Inside/outside classification and boundary membership can only change at a
//! vertex coordinate or right next to one, so keeping `v - 1`, `v` and `v + 1`
//! for every vertex (plus the bounding sentinels) splits each axis into cells
//! that are uniform along their whole length. A polygon spanning billions of
//! tiles collapses into a grid with at most `3n + 2` lines per axis.

use std::collections::HashMap;
use std::fmt;

use crate::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Inclusive tile bounds of a vertex set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Vertex,
    pub max: Vertex,
}

impl BoundingBox {
    pub fn of(vertices: &[Vertex]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), &v| (min.min(v), max.max(v)));
        Some(Self { min, max })
    }
}

/// Sorted grid lines along one axis, with O(1) coordinate lookup.
///
/// Cell `i` covers the tiles `lines[i]..lines[i + 1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressedAxis {
    lines: Vec<i64>,
    index: HashMap<i64, usize>,
}

impl CompressedAxis {
    /// Builds the axis for vertex coordinates `coords` bounded by `min..=max`.
    ///
    /// `max` must lie in [`TILE_RANGE`](crate::TILE_RANGE).
    pub fn new(coords: impl IntoIterator<Item = i64>, min: i64, max: i64) -> Self {
        let end = max + 1;

        let mut lines = vec![min, end];
        for c in coords {
            let neighbours = [c.checked_sub(1), Some(c), c.checked_add(1)];
            lines.extend(neighbours.into_iter().flatten().filter(|l| (min..=end).contains(l)));
        }
        lines.sort_unstable();
        lines.dedup();

        let index = lines.iter().enumerate().map(|(i, &l)| (l, i)).collect();
        Self { lines, index }
    }

    #[inline]
    pub fn index_of(&self, coordinate: i64) -> Option<usize> {
        self.index.get(&coordinate).copied()
    }

    #[cfg(test)]
    pub(crate) fn lines(&self) -> &[i64] {
        &self.lines
    }

    /// Number of cells between consecutive lines.
    pub fn cells(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// First tile coordinate of cell `i`, used as its representative.
    #[inline]
    pub fn cell_start(&self, i: usize) -> i64 {
        self.lines[i]
    }

    /// Number of tiles in cell `i`. Wide enough for any span of `i64` lines.
    #[inline]
    pub fn cell_len(&self, i: usize) -> u128 {
        (i128::from(self.lines[i + 1]) - i128::from(self.lines[i])) as u128
    }
}
