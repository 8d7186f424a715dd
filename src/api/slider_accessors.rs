use std::hash::Hash;

use crate::core::{PositionTable, SelectionRange};
use crate::interaction::{DraggingState, HandleSide};

use super::{BarDimensions, GraphRangeSlider, SliderConfig};

impl<T: Clone, Id: Hash + Eq> GraphRangeSlider<T, Id> {
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Bound selection as last written by a drag, a re-derivation or the host.
    #[must_use]
    pub fn selected_data(&self) -> &[T] {
        &self.selected
    }

    #[must_use]
    pub fn selection_range(&self) -> SelectionRange {
        self.state.range()
    }

    #[must_use]
    pub fn dragging(&self) -> DraggingState {
        self.state.dragging()
    }

    #[must_use]
    pub fn is_handle_enabled(&self, side: HandleSide) -> bool {
        self.state.is_enabled(side)
    }

    #[must_use]
    pub fn positions(&self) -> &PositionTable {
        &self.positions
    }

    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// The slider is hidden while the position table is empty.
    #[must_use]
    pub fn is_slider_visible(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Whether the bar at `index` is highlighted.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.state.range().contains(index)
    }

    /// Bar dimensions for one element, preferring the per-element provider.
    #[must_use]
    pub fn bar_dimensions_for(&self, index: usize) -> BarDimensions {
        match (&self.bar_dimension_provider, self.data.get(index)) {
            (Some(provider), Some(element)) => provider(index, element),
            _ => self.config.bar_dimensions,
        }
    }
}
