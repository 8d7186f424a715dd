use std::hash::Hash;

use tracing::{debug, warn};

use crate::core::{nearest_index, slice_selection};
use crate::interaction::{HandleSide, Transition};

use super::GraphRangeSlider;

impl<T: Clone, Id: Hash + Eq> GraphRangeSlider<T, Id> {
    /// Starts a drag on `side`.
    ///
    /// Returns `false` while the opposite handle drags or when the slider is
    /// hidden.
    pub fn begin_drag(&mut self, side: HandleSide) -> bool {
        if self.state.begin_drag(side) {
            debug!(?side, "begin handle drag");
            return true;
        }
        warn!(
            ?side,
            dragging = ?self.state.dragging(),
            "handle is disabled, ignoring drag start"
        );
        false
    }

    /// Moves the dragging handle to the boundary nearest to pointer `x`.
    ///
    /// `x` is in container coordinates. A handle is drawn centered at its
    /// position plus the handle radius, so the radius is taken off before the
    /// lookup.
    pub fn drag_to(&mut self, x: f64) -> Transition {
        if !self.state.dragging().is_dragging() {
            return Transition::Rejected;
        }
        let target = x - self.config.toggle_radius;
        let Some(index) = nearest_index(self.positions.as_slice(), target) else {
            warn!(x, "pointer coordinate has no nearest boundary, ignoring");
            return Transition::Rejected;
        };
        self.drag_to_index(index)
    }

    /// Moves the dragging handle to a boundary index.
    pub fn drag_to_index(&mut self, index: usize) -> Transition {
        let transition = self.state.move_dragged(index);
        self.apply_transition(transition);
        transition
    }

    /// Moves the left handle; only valid while it drags.
    pub fn move_left(&mut self, index: usize) -> Transition {
        let transition = self.state.move_left(index);
        self.apply_transition(transition);
        transition
    }

    /// Moves the right handle; only valid while it drags.
    pub fn move_right(&mut self, index: usize) -> Transition {
        let transition = self.state.move_right(index);
        self.apply_transition(transition);
        transition
    }

    /// Releases the drag and fires the ended notification.
    pub fn end_drag(&mut self) -> Transition {
        let transition = self.state.end_drag();
        if transition != Transition::Rejected {
            debug!(
                left = self.state.left(),
                right = self.state.right(),
                "end handle drag"
            );
        }
        self.apply_transition(transition);
        transition
    }

    /// Abandons the gesture. Listeners see the same release as `end_drag`.
    pub fn cancel_drag(&mut self) -> Transition {
        self.end_drag()
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Changed(_) => {
                self.sync_selected_data();
                self.on_changed.notify(&self.selected);
            }
            Transition::Ended(range) => {
                let selection = slice_selection(&self.data, range.left, range.right);
                self.on_ended.notify(selection);
            }
            Transition::Rejected | Transition::Unchanged => {}
        }
    }

    /// Registers the continuous-change listener, replacing any previous one.
    pub fn on_changed(&mut self, callback: impl FnMut(&[T]) + 'static) {
        self.on_changed.set(callback);
    }

    /// Registers the drag-release listener, replacing any previous one.
    pub fn on_ended(&mut self, callback: impl FnMut(&[T]) + 'static) {
        self.on_ended.set(callback);
    }

    pub fn clear_on_changed(&mut self) {
        self.on_changed.clear();
    }

    pub fn clear_on_ended(&mut self) {
        self.on_ended.clear();
    }
}
