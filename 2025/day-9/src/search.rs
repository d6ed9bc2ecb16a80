use itertools::Itertools;
use rayon::prelude::*;

use crate::query::{CoverageEngine, TileRect};
use crate::{CoverageError, Vertex};

/// Largest rectangle with two vertices as opposite corners, ignoring the loop.
pub fn max_rectangle_area(vertices: &[Vertex]) -> u128 {
    vertices
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| TileRect::from_corners(a, b).area())
        .max()
        .unwrap_or(0)
}

/// Largest rectangle with two vertices as opposite corners whose every tile is
/// inside the loop or on it.
///
/// Fewer than three vertices cannot enclose anything and yield 0.
#[tracing::instrument(skip_all, fields(vertices = vertices.len()))]
pub fn max_covered_area(vertices: &[Vertex]) -> Result<u128, CoverageError> {
    if vertices.len() < 3 {
        return Ok(0);
    }

    let engine = CoverageEngine::build(vertices)?;
    let best = best_covered_pair(vertices, &engine)?;
    tracing::debug!(best = %best, "candidate search finished");
    Ok(best)
}

/// Scans every unordered pair in parallel. Each worker only queries pairs
/// that could beat its own running maximum.
pub fn best_covered_pair(vertices: &[Vertex], engine: &CoverageEngine) -> Result<u128, CoverageError> {
    vertices
        .par_iter()
        .enumerate()
        .map(|(i, &a)| -> Result<u128, CoverageError> {
            let mut local_max = 0;
            for &b in &vertices[i + 1..] {
                let rect = TileRect::from_corners(a, b);
                let area = rect.area();
                if area <= local_max {
                    continue;
                }
                if engine.is_covered(&rect)? {
                    local_max = area;
                }
            }
            Ok(local_max)
        })
        .try_reduce(|| 0, |a, b| Ok(a.max(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::parser::parse_vertices;

    const EXAMPLE: &str = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";

    fn exhaustive(vertices: &[Vertex], engine: &CoverageEngine) -> Result<u128, CoverageError> {
        let mut best = 0;
        for (&a, &b) in vertices.iter().tuple_combinations() {
            let rect = TileRect::from_corners(a, b);
            if engine.is_covered(&rect)? {
                best = best.max(rect.area());
            }
        }
        Ok(best)
    }

    #[test]
    fn example_loop() -> miette::Result<()> {
        let vertices = parse_vertices(EXAMPLE)?;
        assert_eq!(max_rectangle_area(&vertices), 50);
        assert_eq!(max_covered_area(&vertices)?, 24);
        Ok(())
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![Vertex::new(3, 4)])]
    #[case(vec![Vertex::new(0, 0), Vertex::new(0, 5)])]
    #[case(vec![Vertex::new(0, 0), Vertex::new(7, 9)])]
    fn degenerate_loops_yield_zero(#[case] vertices: Vec<Vertex>) -> miette::Result<()> {
        assert_eq!(max_covered_area(&vertices)?, 0);
        Ok(())
    }

    #[test]
    fn unconstrained_area_needs_two_corners() {
        assert_eq!(max_rectangle_area(&[]), 0);
        assert_eq!(max_rectangle_area(&[Vertex::new(1, 1)]), 0);
        assert_eq!(max_rectangle_area(&[Vertex::new(0, 0), Vertex::new(-2, 3)]), 12);
    }

    #[test]
    fn simple_rectangle() -> miette::Result<()> {
        let vertices = [Vertex::new(0, 0), Vertex::new(3, 0), Vertex::new(3, 2), Vertex::new(0, 2)];
        assert_eq!(max_covered_area(&vertices)?, 12);
        Ok(())
    }

    #[test]
    fn notch_limits_the_l_shape() -> miette::Result<()> {
        let vertices = [
            Vertex::new(0, 0),
            Vertex::new(4, 0),
            Vertex::new(4, 2),
            Vertex::new(2, 2),
            Vertex::new(2, 4),
            Vertex::new(0, 4),
        ];
        // The corner pair (4,0)-(2,4) spans 15 tiles but crosses the notch;
        // the arms are 15 tiles each and fully covered.
        assert_eq!(max_rectangle_area(&vertices), 25);
        assert_eq!(max_covered_area(&vertices)?, 15);
        Ok(())
    }

    #[test]
    fn areas_beyond_u64() -> miette::Result<()> {
        let vertices = parse_vertices(
            "-3000000000,-3000000000
3000000000,-3000000000
3000000000,3000000000
-3000000000,3000000000",
        )?;
        let side = 6_000_000_001u128;

        assert_eq!(max_rectangle_area(&vertices), side * side);
        assert_eq!(max_covered_area(&vertices)?, side * side);
        Ok(())
    }

    #[test]
    fn diagonal_segment_is_an_error() {
        let vertices = [Vertex::new(0, 0), Vertex::new(4, 0), Vertex::new(4, 4), Vertex::new(1, 3)];
        assert_eq!(
            max_covered_area(&vertices),
            Err(CoverageError::NonOrthogonalEdge {
                from: (4, 4),
                to: (1, 3)
            })
        );
    }

    #[rstest]
    #[case(EXAMPLE)]
    #[case("0,0\n20,0\n20,20\n14,20\n14,6\n6,6\n6,20\n0,20")]
    #[case("1,1\n30,1\n30,4\n25,4\n25,30\n20,30\n20,4\n10,4\n10,12\n1,12")]
    #[case("-5,-5\n5,-5\n5,0\n0,0\n0,5\n-5,5")]
    fn pruning_never_changes_the_maximum(#[case] input: &str) -> miette::Result<()> {
        let vertices = parse_vertices(input)?;
        let engine = CoverageEngine::build(&vertices)?;

        assert_eq!(best_covered_pair(&vertices, &engine)?, exhaustive(&vertices, &engine)?);
        Ok(())
    }
}
