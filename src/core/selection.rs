use serde::{Deserialize, Serialize};

/// Half-open index interval `[left, right)` into the data series.
///
/// Indices double as boundary indices into the position table: `left` is the
/// left handle, `right` the right handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRange {
    pub left: usize,
    pub right: usize,
}

impl SelectionRange {
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Range spanning every element of a series with `count` elements.
    #[must_use]
    pub const fn full(count: usize) -> Self {
        Self::new(0, count)
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.right.saturating_sub(self.left)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.left <= index && index < self.right
    }

    /// Clamps the range into `[0, count]` and restores the minimum span.
    ///
    /// A short range grows to the right first and only moves its left edge
    /// when it hits the end of the series. An empty series collapses to `0..0`.
    #[must_use]
    pub fn normalized(self, count: usize, min_count: usize) -> Self {
        if count == 0 {
            return Self::default();
        }

        let span = effective_min_span(count, min_count);
        let (left, right) = {
            let a = self.left.min(count);
            let b = self.right.min(count);
            if a <= b { (a, b) } else { (b, a) }
        };

        if right - left >= span {
            return Self::new(left, right);
        }

        let right = (left + span).min(count);
        let left = left.min(right - span);
        Self::new(left, right)
    }
}

/// Minimum selectable span for a series of `count` elements.
///
/// Never below one, and never above the series length so a short series can
/// still hold a valid selection.
#[must_use]
pub fn effective_min_span(count: usize, min_count: usize) -> usize {
    min_count.max(1).min(count.max(1))
}
