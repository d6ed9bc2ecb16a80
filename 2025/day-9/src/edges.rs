use crate::{CoverageError, Vertex};

/// Edge at a fixed `x`, spanning `y_min..=y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalEdge {
    pub x: i64,
    pub y_min: i64,
    pub y_max: i64,
}

/// Edge at a fixed `y`, spanning `x_min..=x_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalEdge {
    pub y: i64,
    pub x_min: i64,
    pub x_max: i64,
}

impl VerticalEdge {
    pub fn is_degenerate(&self) -> bool {
        self.y_min == self.y_max
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edges {
    pub vertical: Vec<VerticalEdge>,
    pub horizontal: Vec<HorizontalEdge>,
}

impl Edges {
    /// Splits the closed loop `vertices[0] -> ... -> vertices[n-1] -> vertices[0]`
    /// into axis-aligned edges with normalized endpoints.
    ///
    /// Repeated tiles produce a zero-length vertical edge.
    pub fn from_loop(vertices: &[Vertex]) -> Result<Self, CoverageError> {
        let mut edges = Edges::default();

        let next = vertices.iter().cycle().skip(1);
        for (&a, &b) in vertices.iter().zip(next) {
            if a.x == b.x {
                edges.vertical.push(VerticalEdge {
                    x: a.x,
                    y_min: a.y.min(b.y),
                    y_max: a.y.max(b.y),
                });
            } else if a.y == b.y {
                edges.horizontal.push(HorizontalEdge {
                    y: a.y,
                    x_min: a.x.min(b.x),
                    x_max: a.x.max(b.x),
                });
            } else {
                return Err(CoverageError::NonOrthogonalEdge {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                });
            }
        }

        tracing::trace!(
            vertical = edges.vertical.len(),
            horizontal = edges.horizontal.len(),
            "extracted edges"
        );
        Ok(edges)
    }
}
