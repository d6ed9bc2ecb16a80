use miette::*;

use crate::parser::parse_vertices;
use crate::search::max_covered_area;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let vertices = parse_vertices(input)?;

    let max_valid_area = max_covered_area(&vertices)?;
    tracing::info!(max_valid_area = %max_valid_area, "largest red/green rectangle");

    Ok(max_valid_area.to_string())
}
