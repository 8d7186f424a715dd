use std::hash::Hash;

use tracing::debug;

use crate::core::{
    IdentityIndex, PositionTable, SelectionRange, indices_for_selection, slice_selection,
};
use crate::error::SliderResult;

use super::GraphRangeSlider;
use super::config_validation::validate_track_width;

impl<T: Clone, Id: Hash + Eq> GraphRangeSlider<T, Id> {
    /// Handles a new container width.
    ///
    /// Rebuilds the position table, then re-derives the handles from the
    /// current selection so a resize never discards it.
    pub fn set_container_width(&mut self, width: f64) -> SliderResult<()> {
        validate_track_width(width)?;
        debug!(width, count = self.data.len(), "container resized");
        self.container_width = width;
        self.recompute_positions();
        self.rederive_indices();
        Ok(())
    }

    /// Replaces the data series.
    ///
    /// The current selection is looked up in the new series by identity;
    /// boundaries that no longer exist fall back to the series ends.
    pub fn set_data(&mut self, data: Vec<T>) {
        debug!(
            previous_count = self.data.len(),
            count = data.len(),
            "replace data series"
        );
        self.replace_data(data);
        self.recompute_positions();
        self.rederive_indices();
    }

    /// Replaces the bound selection from the host side.
    ///
    /// Only the handles move; the position table is left as is. No
    /// notification fires.
    pub fn set_selected_data(&mut self, selected: Vec<T>) {
        debug!(selected_count = selected.len(), "host replaced selection");
        self.selected = selected;
        self.rederive_indices();
    }

    /// Applies a width change and a data change observed together.
    ///
    /// The table is rebuilt for both before any index is re-derived.
    pub fn update_layout(&mut self, width: f64, data: Vec<T>) -> SliderResult<()> {
        validate_track_width(width)?;
        debug!(width, count = data.len(), "layout and data changed");
        self.container_width = width;
        self.replace_data(data);
        self.recompute_positions();
        self.rederive_indices();
        Ok(())
    }

    fn replace_data(&mut self, data: Vec<T>) {
        self.identity_index = IdentityIndex::build(&data, &self.identify);
        self.data = data;
    }

    pub(super) fn recompute_positions(&mut self) {
        self.positions = PositionTable::compute(
            self.container_width,
            self.data.len(),
            self.config.toggle_radius,
        );
    }

    pub(super) fn rederive_indices(&mut self) {
        let derived = indices_for_selection(
            &self.selected,
            &self.identity_index,
            &self.identify,
            self.positions.len(),
        );
        self.state.reset(derived, self.positions.len());
        self.sync_selected_data();
        debug!(
            left = self.state.left(),
            right = self.state.right(),
            "re-derived handle indices"
        );
    }

    /// Mirrors the handle range into the bound selection.
    pub(super) fn sync_selected_data(&mut self) {
        let SelectionRange { left, right } = self.state.range();
        self.selected = slice_selection(&self.data, left, right).to_vec();
    }
}
