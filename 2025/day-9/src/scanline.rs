use bitvec::prelude::*;
use rayon::prelude::*;

use crate::compress::CompressedAxis;
use crate::edges::VerticalEdge;
use crate::intervals::IntervalIndex;

/// One bit per compressed cell, row-major; set when the cell is inside the
/// loop or on its boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMask {
    columns: usize,
    rows: usize,
    bits: BitVec<u64, Lsb0>,
}

impl CellMask {
    #[inline]
    pub fn is_allowed(&self, column: usize, row: usize) -> bool {
        self.bits[row * self.columns + column]
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// Sorted `x` positions where a rightward ray at height `y` crosses the loop.
///
/// Edges count on `y_min <= y < y_max`, so a ray through a vertex shared by
/// two vertical edges is only counted once.
pub fn crossings_at(y: i64, vertical: &[VerticalEdge]) -> Vec<i64> {
    let mut xs: Vec<i64> = vertical
        .iter()
        .filter(|e| !e.is_degenerate() && e.y_min <= y && y < e.y_max)
        .map(|e| e.x)
        .collect();
    xs.sort_unstable();
    xs
}

/// Even/odd classification of one compressed cell, given its representative tile.
#[inline]
fn is_allowed(x: i64, y: i64, crossings: &[i64], boundary: &IntervalIndex) -> bool {
    if boundary.on_boundary(x, y) {
        return true;
    }
    let left = crossings.partition_point(|&c| c < x);
    left % 2 == 1
}

/// Classifies every cell of the compressed grid. Rows are independent and are
/// processed in parallel.
#[tracing::instrument(skip_all, fields(columns = x_axis.cells(), rows = y_axis.cells()))]
pub fn classify(
    x_axis: &CompressedAxis,
    y_axis: &CompressedAxis,
    vertical: &[VerticalEdge],
    boundary: &IntervalIndex,
) -> CellMask {
    let columns = x_axis.cells();
    let rows = y_axis.cells();

    let row_bits: Vec<BitVec<u64, Lsb0>> = (0..rows)
        .into_par_iter()
        .map(|row| {
            let y = y_axis.cell_start(row);
            let crossings = crossings_at(y, vertical);
            (0..columns)
                .map(|column| is_allowed(x_axis.cell_start(column), y, &crossings, boundary))
                .collect::<BitVec<u64, Lsb0>>()
        })
        .collect();

    let mut bits = BitVec::with_capacity(columns * rows);
    for row in &row_bits {
        bits.extend_from_bitslice(row);
    }

    tracing::debug!(allowed = bits.count_ones(), cells = bits.len(), "classified cells");
    CellMask {
        columns,
        rows,
        bits,
    }
}
