use miette::*;

use crate::parser::parse_vertices;
use crate::search::max_rectangle_area;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let vertices = parse_vertices(input)?;

    // Any two red tiles may be opposite corners; the loop itself is ignored.
    let max_area = max_rectangle_area(&vertices);

    Ok(max_area.to_string())
}
