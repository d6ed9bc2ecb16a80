use crate::compress::{Axis, BoundingBox, CompressedAxis};
use crate::edges::Edges;
use crate::intervals::IntervalIndex;
use crate::prefix::PrefixGrid;
use crate::scanline;
use crate::{CoverageError, Vertex, TILE_RANGE};

/// Inclusive rectangle of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub min: Vertex,
    pub max: Vertex,
}

impl TileRect {
    /// The rectangle with `a` and `b` as opposite corners, in any order.
    pub fn from_corners(a: Vertex, b: Vertex) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Tiles in the rectangle. Exact for corners inside [`TILE_RANGE`].
    #[inline]
    pub fn area(&self) -> u128 {
        let w = (i128::from(self.max.x) - i128::from(self.min.x)) as u128 + 1;
        let h = (i128::from(self.max.y) - i128::from(self.min.y)) as u128 + 1;
        w * h
    }
}

/// Answers "how many tiles of this rectangle are red or green" in O(1).
///
/// Built once per loop; read-only afterwards, so it can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageEngine {
    x_axis: CompressedAxis,
    y_axis: CompressedAxis,
    prefix: PrefixGrid,
}

impl CoverageEngine {
    #[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
    pub fn build(vertices: &[Vertex]) -> Result<Self, CoverageError> {
        for v in vertices {
            check_range(Axis::X, v.x)?;
            check_range(Axis::Y, v.y)?;
        }

        let edges = Edges::from_loop(vertices)?;
        let boundary = IntervalIndex::new(&edges);

        let (x_axis, y_axis) = match BoundingBox::of(vertices) {
            Some(bbox) => (
                CompressedAxis::new(vertices.iter().map(|v| v.x), bbox.min.x, bbox.max.x),
                CompressedAxis::new(vertices.iter().map(|v| v.y), bbox.min.y, bbox.max.y),
            ),
            None => (CompressedAxis::default(), CompressedAxis::default()),
        };
        tracing::debug!(
            columns = x_axis.cells(),
            rows = y_axis.cells(),
            "compressed tile plane"
        );

        let mask = scanline::classify(&x_axis, &y_axis, &edges.vertical, &boundary);
        let prefix = PrefixGrid::build(&mask, &x_axis, &y_axis);

        let engine = Self {
            x_axis,
            y_axis,
            prefix,
        };
        tracing::debug!(allowed = %engine.total_allowed(), "built coverage engine");
        Ok(engine)
    }

    fn line(&self, axis: Axis, coordinate: i64) -> Result<usize, CoverageError> {
        let compressed = match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        };
        compressed
            .index_of(coordinate)
            .ok_or(CoverageError::MissingGridLine { axis, coordinate })
    }

    /// Number of allowed tiles inside `rect`.
    ///
    /// Every side of `rect` must fall on a grid line, which holds for any
    /// rectangle whose corners are vertices of the loop.
    #[inline]
    pub fn allowed_tiles(&self, rect: &TileRect) -> Result<u128, CoverageError> {
        let left = self.line(Axis::X, rect.min.x)?;
        let right = self.line(Axis::X, past(Axis::X, rect.max.x)?)?;
        let bottom = self.line(Axis::Y, rect.min.y)?;
        let top = self.line(Axis::Y, past(Axis::Y, rect.max.y)?)?;
        Ok(self.prefix.sum(left, right, bottom, top))
    }

    /// Whether every tile of `rect` is inside the loop or on its boundary.
    #[inline]
    pub fn is_covered(&self, rect: &TileRect) -> Result<bool, CoverageError> {
        Ok(self.allowed_tiles(rect)? == rect.area())
    }

    /// Tiles enclosed by the loop, boundary included.
    pub fn total_allowed(&self) -> u128 {
        self.prefix.total()
    }
}

fn check_range(axis: Axis, coordinate: i64) -> Result<(), CoverageError> {
    if TILE_RANGE.contains(&coordinate) {
        Ok(())
    } else {
        Err(CoverageError::CoordinateOutOfRange { axis, coordinate })
    }
}

/// The grid line just past the last tile at `coordinate`.
#[inline]
fn past(axis: Axis, coordinate: i64) -> Result<i64, CoverageError> {
    coordinate
        .checked_add(1)
        .ok_or(CoverageError::CoordinateOutOfRange { axis, coordinate })
}
