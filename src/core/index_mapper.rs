use std::hash::Hash;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::SelectionRange;

/// Returns the table index closest to `target_x`.
///
/// Ties resolve to the lowest index. `None` for an empty table or a
/// non-finite target.
#[must_use]
pub fn nearest_index(positions: &[f64], target_x: f64) -> Option<usize> {
    if !target_x.is_finite() {
        return None;
    }

    positions
        .iter()
        .enumerate()
        .min_by_key(|&(_, &position)| OrderedFloat((position - target_x).abs()))
        .map(|(index, _)| index)
}

/// Identity to index lookup for one data series.
///
/// Built once per data replacement. Duplicate identities keep their first
/// index.
#[derive(Debug, Clone)]
pub struct IdentityIndex<Id> {
    indices: IndexMap<Id, usize>,
}

impl<Id: Hash + Eq> IdentityIndex<Id> {
    pub fn build<T>(data: &[T], identify: impl Fn(&T) -> Id) -> Self {
        let mut indices = IndexMap::with_capacity(data.len());
        for (index, element) in data.iter().enumerate() {
            indices.entry(identify(element)).or_insert(index);
        }
        Self { indices }
    }

    #[must_use]
    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.indices.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<Id: Hash + Eq> Default for IdentityIndex<Id> {
    fn default() -> Self {
        Self {
            indices: IndexMap::new(),
        }
    }
}

/// Locates a selected sub-sequence inside the series.
///
/// `left` is the index of the first selected element, `right` one past the
/// index of the last one. When both ends are known but given in reverse
/// series order, the range still spans from the earlier to the later one.
/// A missing or unknown boundary falls back to the table ends (`0` and
/// `position_count - 1`). The result is not normalized.
pub fn indices_for_selection<T, Id: Hash + Eq>(
    selection: &[T],
    index: &IdentityIndex<Id>,
    identify: impl Fn(&T) -> Id,
    position_count: usize,
) -> SelectionRange {
    let first = selection
        .first()
        .and_then(|element| index.index_of(&identify(element)));
    let last = selection
        .last()
        .and_then(|element| index.index_of(&identify(element)));

    match (first, last) {
        (Some(first), Some(last)) => SelectionRange::new(first.min(last), first.max(last) + 1),
        (first, last) => SelectionRange::new(
            first.unwrap_or(0),
            last.map_or(position_count.saturating_sub(1), |last| last + 1),
        ),
    }
}

/// Materializes `data[left..right]` with both bounds clamped to the series.
#[must_use]
pub fn slice_selection<T>(data: &[T], left: usize, right: usize) -> &[T] {
    let right = right.min(data.len());
    let left = left.min(right);
    &data[left..right]
}
