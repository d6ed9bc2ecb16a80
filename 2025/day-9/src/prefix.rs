use crate::compress::CompressedAxis;
use crate::scanline::CellMask;

/// Cumulative allowed-tile counts over the compressed grid, flattened row-major
/// with `columns + 1` entries per row.
///
/// Entry `(c, r)` holds the tiles of every allowed cell in columns `< c` and
/// rows `< r`, so row 0 and column 0 are zero. Counts are `u128`: a loop spread
/// over the whole `i64` plane encloses more than `u64::MAX` tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixGrid {
    stride: usize,
    sums: Vec<u128>,
}

impl PrefixGrid {
    /// Weights each allowed cell by the number of real tiles it stands for.
    pub fn build(mask: &CellMask, x_axis: &CompressedAxis, y_axis: &CompressedAxis) -> Self {
        let columns = mask.columns();
        let rows = mask.rows();
        let stride = columns + 1;
        let mut sums = vec![0u128; stride * (rows + 1)];

        for row in 0..rows {
            let height = y_axis.cell_len(row);
            let mut running = 0u128;

            for column in 0..columns {
                if mask.is_allowed(column, row) {
                    running += x_axis.cell_len(column) * height;
                }
                sums[(row + 1) * stride + column + 1] = sums[row * stride + column + 1] + running;
            }
        }

        Self { stride, sums }
    }

    #[inline(always)]
    fn at(&self, column: usize, row: usize) -> u128 {
        self.sums[row * self.stride + column]
    }

    /// Allowed tiles in cells `left..right` x `bottom..top`.
    #[inline]
    pub fn sum(&self, left: usize, right: usize, bottom: usize, top: usize) -> u128 {
        // Both strips are non-negative and the left one is contained in the
        // right one, so neither subtraction can wrap.
        let right_strip = self.at(right, top) - self.at(right, bottom);
        let left_strip = self.at(left, top) - self.at(left, bottom);
        right_strip - left_strip
    }

    /// Total allowed tiles in the whole grid.
    pub fn total(&self) -> u128 {
        self.sums.last().copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::compress::BoundingBox;
    use crate::edges::Edges;
    use crate::intervals::IntervalIndex;
    use crate::scanline::classify;
    use crate::Vertex;

    fn prefix_for(vertices: &[Vertex]) -> miette::Result<(CompressedAxis, CompressedAxis, PrefixGrid)> {
        let edges = Edges::from_loop(vertices)?;
        let bbox = BoundingBox::of(vertices).ok_or(miette::miette!("empty loop"))?;
        let x_axis = CompressedAxis::new(vertices.iter().map(|v| v.x), bbox.min.x, bbox.max.x);
        let y_axis = CompressedAxis::new(vertices.iter().map(|v| v.y), bbox.min.y, bbox.max.y);
        let mask = classify(&x_axis, &y_axis, &edges.vertical, &IntervalIndex::new(&edges));
        let prefix = PrefixGrid::build(&mask, &x_axis, &y_axis);
        Ok((x_axis, y_axis, prefix))
    }

    #[test]
    fn first_row_and_column_are_zero() -> miette::Result<()> {
        let (x_axis, y_axis, prefix) =
            prefix_for(&[Vertex::new(0, 0), Vertex::new(3, 0), Vertex::new(3, 2), Vertex::new(0, 2)])?;

        for column in 0..=x_axis.cells() {
            assert_eq!(prefix.sum(0, column, 0, 0), 0);
            assert_eq!(prefix.at(column, 0), 0);
        }
        for row in 0..=y_axis.cells() {
            assert_eq!(prefix.at(0, row), 0);
        }
        assert_eq!(prefix.total(), 12);
        Ok(())
    }

    #[test]
    fn cells_are_weighted_by_tile_area() -> miette::Result<()> {
        // 1001 x 501 tiles, squeezed into a 5 x 5 grid.
        let (x_axis, y_axis, prefix) = prefix_for(&[
            Vertex::new(0, 0),
            Vertex::new(1000, 0),
            Vertex::new(1000, 500),
            Vertex::new(0, 500),
        ])?;

        assert_eq!(x_axis.cells(), 4);
        assert_eq!(y_axis.cells(), 4);
        assert_eq!(prefix.total(), 1001 * 501);
        // Interior cell [1, 999) x [1, 499).
        assert_eq!(prefix.sum(1, 2, 1, 2), 998 * 498);
        Ok(())
    }

    #[test]
    fn concave_notch_is_excluded() -> miette::Result<()> {
        let (_, _, prefix) = prefix_for(&[
            Vertex::new(0, 0),
            Vertex::new(4, 0),
            Vertex::new(4, 2),
            Vertex::new(2, 2),
            Vertex::new(2, 4),
            Vertex::new(0, 4),
        ])?;

        // 5x5 box minus the 2x2 notch at (3..=4, 3..=4).
        assert_eq!(prefix.total(), 25 - 4);
        Ok(())
    }

    #[test]
    fn counts_beyond_u64() -> miette::Result<()> {
        let (lo, hi) = (-3_000_000_000i64, 3_000_000_000i64);
        let (_, _, prefix) = prefix_for(&[
            Vertex::new(lo, lo),
            Vertex::new(hi, lo),
            Vertex::new(hi, hi),
            Vertex::new(lo, hi),
        ])?;

        let side = 6_000_000_001u128;
        assert!(side * side > u128::from(u64::MAX));
        assert_eq!(prefix.total(), side * side);
        Ok(())
    }
}
