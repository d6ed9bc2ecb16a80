use chumsky::prelude::*;

use crate::{CoverageError, Vertex, TILE_RANGE};

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vertex>, extra::Err<Rich<'a, char>>> {
    // Signed, and every tile needs representable neighbours.
    let coord = just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|digits: &str, span| match digits.parse::<i64>() {
            Ok(value) if TILE_RANGE.contains(&value) => Ok(value),
            Ok(value) => Err(Rich::custom(
                span,
                format!("tile coordinate {value} has no neighbour on one side"),
            )),
            Err(e) => Err(Rich::custom(
                span,
                format!("`{digits}` is not a tile coordinate: {e}"),
            )),
        });

    coord
        .then_ignore(just(','))
        .then(coord)
        .map(|(x, y)| Vertex::new(x, y))
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .padded()
}

/// Parses the red tile loop, one `x,y` pair per line.
///
/// The error points at the first offending record of `input`.
pub fn parse_vertices(input: &str) -> Result<Vec<Vertex>, CoverageError> {
    parser().parse(input).into_result().map_err(|errs| {
        let (span, reason) = errs
            .first()
            .map(|e| (e.span().start..e.span().end, e.reason().to_string()))
            .unwrap_or_else(|| (input.len()..input.len(), "unexpected input".to_string()));
        CoverageError::Parse {
            input: input.to_string(),
            span: span.into(),
            reason,
        }
    })
}
