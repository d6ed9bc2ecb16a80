use std::collections::HashMap;
use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::edges::Edges;

/// Sorted, disjoint, non-adjacent inclusive spans along one line of tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    spans: Vec<RangeInclusive<i64>>,
}

impl IntervalSet {
    /// Merges overlapping spans, and adjacent ones too: `3..=5` and `6..=8`
    /// cover the contiguous tiles `3..=8`.
    pub fn from_spans(mut spans: Vec<RangeInclusive<i64>>) -> Self {
        spans.sort_unstable_by_key(|s| (*s.start(), *s.end()));

        let mut merged: Vec<RangeInclusive<i64>> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if *span.start() <= last.end().saturating_add(1) => {
                    if span.end() > last.end() {
                        *last = *last.start()..=*span.end();
                    }
                }
                _ => merged.push(span),
            }
        }

        Self { spans: merged }
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        // First span starting after `value`; only its predecessor can hold it.
        let idx = self.spans.partition_point(|s| *s.start() <= value);
        idx > 0 && value <= *self.spans[idx - 1].end()
    }

    #[cfg(test)]
    pub(crate) fn spans(&self) -> &[RangeInclusive<i64>] {
        &self.spans
    }
}

/// Boundary tiles of the loop, grouped by the coordinate each edge is fixed on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalIndex {
    pub vertical_by_x: HashMap<i64, IntervalSet>,
    pub horizontal_by_y: HashMap<i64, IntervalSet>,
}

impl IntervalIndex {
    pub fn new(edges: &Edges) -> Self {
        let vertical_by_x = edges
            .vertical
            .iter()
            .map(|e| (e.x, e.y_min..=e.y_max))
            .into_group_map()
            .into_iter()
            .map(|(x, spans)| (x, IntervalSet::from_spans(spans)))
            .collect();

        let horizontal_by_y = edges
            .horizontal
            .iter()
            .map(|e| (e.y, e.x_min..=e.x_max))
            .into_group_map()
            .into_iter()
            .map(|(y, spans)| (y, IntervalSet::from_spans(spans)))
            .collect();

        Self {
            vertical_by_x,
            horizontal_by_y,
        }
    }

    /// Whether the tile `(x, y)` lies on any edge of the loop.
    pub fn on_boundary(&self, x: i64, y: i64) -> bool {
        self.horizontal_by_y
            .get(&y)
            .is_some_and(|set| set.contains(x))
            || self
                .vertical_by_x
                .get(&x)
                .is_some_and(|set| set.contains(y))
    }
}
