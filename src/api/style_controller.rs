use std::hash::Hash;

use tracing::debug;

use crate::error::{SliderError, SliderResult};
use crate::render::Color;

use super::config_validation::{
    validate_bar_dimensions, validate_non_negative, validate_slider_config,
};
use super::{BarDimensions, GraphRangeSlider, SliderConfig};

impl<T: Clone, Id: Hash + Eq> GraphRangeSlider<T, Id> {
    /// Replaces the whole style configuration.
    ///
    /// Geometry is rebuilt and the current selection re-derived because the
    /// handle radius and minimum span may both change.
    pub fn set_config(&mut self, config: SliderConfig) -> SliderResult<()> {
        validate_slider_config(&config)?;
        debug!(?config, "replace slider config");
        self.config = config;
        self.state.set_min_count(config.min_count);
        self.recompute_positions();
        self.rederive_indices();
        Ok(())
    }

    pub fn set_active_color(&mut self, color: Color) -> SliderResult<()> {
        color
            .validate()
            .map_err(|e| SliderError::InvalidConfig(format!("active color: {e}")))?;
        self.config.active_color = color;
        Ok(())
    }

    pub fn set_inactive_color(&mut self, color: Color) -> SliderResult<()> {
        color
            .validate()
            .map_err(|e| SliderError::InvalidConfig(format!("inactive color: {e}")))?;
        self.config.inactive_color = color;
        Ok(())
    }

    /// Sets the handle radius and rebuilds the position table.
    pub fn set_toggle_radius(&mut self, toggle_radius: f64) -> SliderResult<()> {
        validate_non_negative("toggle radius", toggle_radius)?;
        debug!(toggle_radius, "set toggle radius");
        self.config.toggle_radius = toggle_radius;
        self.recompute_positions();
        self.rederive_indices();
        Ok(())
    }

    pub fn set_slider_bar_height(&mut self, slider_bar_height: f64) -> SliderResult<()> {
        validate_non_negative("slider bar height", slider_bar_height)?;
        self.config.slider_bar_height = slider_bar_height;
        Ok(())
    }

    pub fn set_margin(&mut self, margin: f64) -> SliderResult<()> {
        validate_non_negative("margin", margin)?;
        self.config.margin = margin;
        Ok(())
    }

    /// Sets the minimum selectable span, floored at one.
    ///
    /// A current selection shorter than the new span is widened silently.
    pub fn set_min_count(&mut self, min_count: usize) {
        let min_count = min_count.max(1);
        debug!(min_count, "set min count");
        self.config.min_count = min_count;
        self.state.set_min_count(min_count);
        self.sync_selected_data();
    }

    pub fn set_hidden_chart(&mut self, is_hidden_chart: bool) {
        self.config.is_hidden_chart = is_hidden_chart;
    }

    pub fn set_bar_dimensions(&mut self, dimensions: BarDimensions) -> SliderResult<()> {
        validate_bar_dimensions(dimensions)?;
        self.config.bar_dimensions = dimensions;
        Ok(())
    }

    /// Sizes bars per element. Takes precedence over the configured dimensions.
    pub fn set_bar_dimension_provider(
        &mut self,
        provider: impl Fn(usize, &T) -> BarDimensions + 'static,
    ) {
        self.bar_dimension_provider = Some(Box::new(provider));
    }

    pub fn clear_bar_dimension_provider(&mut self) {
        self.bar_dimension_provider = None;
    }
}
