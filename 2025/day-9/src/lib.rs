use std::ops::RangeInclusive;

pub mod compress;
pub mod edges;
pub mod error;
pub mod intervals;
pub mod parser;
pub mod prefix;
pub mod query;
pub mod scanline;
pub mod search;

pub mod part1;
pub mod part2;

pub use error::CoverageError;
pub use query::{CoverageEngine, TileRect};

/// A red tile of the polygon loop, in tile coordinates.
pub type Vertex = glam::I64Vec2;

/// Coordinates a tile may take: both of its neighbours must be representable.
pub const TILE_RANGE: RangeInclusive<i64> = (i64::MIN + 1)..=(i64::MAX - 1);
