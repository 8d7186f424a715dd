mod config_validation;
mod drag_controller;
mod frame_builder;
mod listeners;
mod selection_controller;
mod slider_accessors;
mod slider_config;
mod snapshot;
mod style_controller;

use std::hash::Hash;

use tracing::debug;

use crate::core::{IdentityIndex, Identifiable, PositionTable};
use crate::error::SliderResult;
use crate::interaction::RangeSelectionState;

pub use listeners::SelectionListener;
pub use slider_config::{BarDimension, BarDimensions, DEFAULT_BAR_WIDTH_RATIO, SliderConfig};
pub use snapshot::{SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderSnapshot, SliderSnapshotJsonContractV1};

/// Maps an element to its stable identity.
pub type IdentifyFn<T, Id> = Box<dyn Fn(&T) -> Id>;

/// Per-element override of the configured bar dimensions.
pub type BarDimensionProvider<T> = Box<dyn Fn(usize, &T) -> BarDimensions>;

/// Bar chart with a dual-handle range slider.
///
/// The slider owns a copy of the host's series and the bound selection. Host
/// events go through the trigger methods (`set_container_width`, `set_data`,
/// `set_selected_data`), pointer gestures through the drag methods. Both
/// keep the position table, the handle indices and the selection consistent.
pub struct GraphRangeSlider<T, Id> {
    data: Vec<T>,
    identify: IdentifyFn<T, Id>,
    identity_index: IdentityIndex<Id>,
    selected: Vec<T>,
    container_width: f64,
    positions: PositionTable,
    state: RangeSelectionState,
    config: SliderConfig,
    bar_dimension_provider: Option<BarDimensionProvider<T>>,
    on_changed: SelectionListener<T>,
    on_ended: SelectionListener<T>,
}

impl<T: Clone, Id: Hash + Eq> GraphRangeSlider<T, Id> {
    /// Creates a slider whose elements are identified by `identify`.
    ///
    /// The initial handles are derived from `selected`; an empty selection
    /// selects the whole series. The container width starts at zero until the
    /// host reports a layout.
    pub fn new(data: Vec<T>, identify: impl Fn(&T) -> Id + 'static, selected: Vec<T>) -> Self {
        let config = SliderConfig::default();
        let identity_index = IdentityIndex::build(&data, &identify);
        let mut slider = Self {
            data,
            identify: Box::new(identify),
            identity_index,
            selected,
            container_width: 0.0,
            positions: PositionTable::default(),
            state: RangeSelectionState::new(0, config.min_count),
            config,
            bar_dimension_provider: None,
            on_changed: SelectionListener::new(),
            on_ended: SelectionListener::new(),
        };
        slider.recompute_positions();
        slider.rederive_indices();
        debug!(
            count = slider.data.len(),
            left = slider.state.left(),
            right = slider.state.right(),
            "create graph range slider"
        );
        slider
    }

    /// Creates a slider with a validated style configuration.
    pub fn with_config(
        data: Vec<T>,
        identify: impl Fn(&T) -> Id + 'static,
        selected: Vec<T>,
        config: SliderConfig,
    ) -> SliderResult<Self> {
        let mut slider = Self::new(data, identify, selected);
        slider.set_config(config)?;
        Ok(slider)
    }
}

impl<T, Id> GraphRangeSlider<T, Id>
where
    T: Clone + Identifiable<Id = Id> + 'static,
    Id: Hash + Eq + 'static,
{
    /// Creates a slider over elements that identify themselves.
    pub fn identified(data: Vec<T>, selected: Vec<T>) -> Self {
        Self::new(data, |element: &T| element.id(), selected)
    }
}
