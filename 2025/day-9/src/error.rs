use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::compress::Axis;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoverageError {
    #[error("failed to parse tile list: {reason}")]
    #[diagnostic(
        code(coverage::parse),
        help("every line must be a pair of integers such as `7,1`")
    )]
    Parse {
        #[source_code]
        input: String,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },

    #[error("segment {from:?} -> {to:?} is neither horizontal nor vertical")]
    #[diagnostic(
        code(coverage::non_orthogonal_edge),
        help("consecutive tiles of the loop must share an x or a y coordinate")
    )]
    NonOrthogonalEdge { from: (i64, i64), to: (i64, i64) },

    #[error("{axis} coordinate {coordinate} leaves no room for a neighbouring tile")]
    #[diagnostic(
        code(coverage::coordinate_out_of_range),
        help("tile coordinates must lie strictly between i64::MIN and i64::MAX")
    )]
    CoordinateOutOfRange { axis: Axis, coordinate: i64 },

    #[error("coordinate {coordinate} is not a grid line on the {axis} axis")]
    #[diagnostic(
        code(coverage::missing_grid_line),
        help("rectangle corners must come from the loop the engine was built from")
    )]
    MissingGridLine { axis: Axis, coordinate: i64 },
}
