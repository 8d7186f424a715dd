use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{SelectionRange, effective_min_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleSide {
    Left,
    Right,
}

impl HandleSide {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Which handle, if any, the current pointer gesture is moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraggingState {
    #[default]
    None,
    Left,
    Right,
}

impl DraggingState {
    #[must_use]
    pub fn side(self) -> Option<HandleSide> {
        match self {
            Self::None => None,
            Self::Left => Some(HandleSide::Left),
            Self::Right => Some(HandleSide::Right),
        }
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self != Self::None
    }
}

impl From<HandleSide> for DraggingState {
    fn from(side: HandleSide) -> Self {
        match side {
            HandleSide::Left => Self::Left,
            HandleSide::Right => Self::Right,
        }
    }
}

/// Outcome of one state-machine transition.
///
/// The caller maps `Changed` to the continuous notification and `Ended` to
/// the release notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The transition is not allowed in the current state.
    Rejected,
    /// Accepted, but no index moved.
    Unchanged,
    Changed(SelectionRange),
    Ended(SelectionRange),
}

/// Two-handle selection state.
///
/// Holds `0 <= left < right <= position_count - 1` and
/// `right - left >= min span` after every transition, for any non-empty
/// table. While one handle drags the other one cannot move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSelectionState {
    range: SelectionRange,
    dragging: DraggingState,
    min_count: usize,
    position_count: usize,
}

impl Default for RangeSelectionState {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl RangeSelectionState {
    /// Starts with the full range selected.
    #[must_use]
    pub fn new(position_count: usize, min_count: usize) -> Self {
        let count = position_count.saturating_sub(1);
        let min_count = min_count.max(1);
        Self {
            range: SelectionRange::full(count).normalized(count, min_count),
            dragging: DraggingState::None,
            min_count,
            position_count,
        }
    }

    #[must_use]
    pub fn range(self) -> SelectionRange {
        self.range
    }

    #[must_use]
    pub fn left(self) -> usize {
        self.range.left
    }

    #[must_use]
    pub fn right(self) -> usize {
        self.range.right
    }

    #[must_use]
    pub fn dragging(self) -> DraggingState {
        self.dragging
    }

    #[must_use]
    pub fn min_count(self) -> usize {
        self.min_count
    }

    #[must_use]
    pub fn position_count(self) -> usize {
        self.position_count
    }

    /// Number of elements the table was built for.
    #[must_use]
    pub fn element_count(self) -> usize {
        self.position_count.saturating_sub(1)
    }

    fn min_span(self) -> usize {
        effective_min_span(self.element_count(), self.min_count)
    }

    /// Whether `side` currently accepts pointer input.
    #[must_use]
    pub fn is_enabled(self, side: HandleSide) -> bool {
        self.position_count > 0 && self.dragging.side() != Some(side.opposite())
    }

    /// Replaces both indices from a freshly derived range.
    ///
    /// The range is normalized against the new table, so any derived value
    /// is accepted. An in-flight drag stays pending until `end_drag`, even
    /// when the table emptied.
    pub fn reset(&mut self, range: SelectionRange, position_count: usize) {
        self.position_count = position_count;
        self.range = range.normalized(self.element_count(), self.min_count);
    }

    /// Updates the minimum span (floored at one) and renormalizes.
    pub fn set_min_count(&mut self, min_count: usize) {
        self.min_count = min_count.max(1);
        self.range = self.range.normalized(self.element_count(), self.min_count);
    }

    /// Returns `false` when the opposite handle is already dragging.
    pub fn begin_drag(&mut self, side: HandleSide) -> bool {
        if !self.is_enabled(side) {
            return false;
        }
        self.dragging = side.into();
        true
    }

    pub fn move_left(&mut self, index: usize) -> Transition {
        if self.dragging != DraggingState::Left {
            return Transition::Rejected;
        }

        let upper = self.range.right.saturating_sub(self.min_span());
        let left = index.min(upper);
        if left == self.range.left {
            return Transition::Unchanged;
        }

        trace!(from = self.range.left, to = left, "move left handle");
        self.range.left = left;
        Transition::Changed(self.range)
    }

    pub fn move_right(&mut self, index: usize) -> Transition {
        if self.dragging != DraggingState::Right {
            return Transition::Rejected;
        }

        let lower = self.range.left + self.min_span();
        let right = index.max(lower).min(self.element_count());
        if right == self.range.right {
            return Transition::Unchanged;
        }

        trace!(from = self.range.right, to = right, "move right handle");
        self.range.right = right;
        Transition::Changed(self.range)
    }

    /// Moves whichever handle is dragging.
    pub fn move_dragged(&mut self, index: usize) -> Transition {
        match self.dragging {
            DraggingState::None => Transition::Rejected,
            DraggingState::Left => self.move_left(index),
            DraggingState::Right => self.move_right(index),
        }
    }

    /// Releases the dragging handle. Idle state rejects.
    pub fn end_drag(&mut self) -> Transition {
        if !self.dragging.is_dragging() {
            return Transition::Rejected;
        }
        self.dragging = DraggingState::None;
        Transition::Ended(self.range)
    }
}
