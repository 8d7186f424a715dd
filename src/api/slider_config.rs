use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};
use crate::render::Color;

use super::config_validation::validate_slider_config;

/// Share of a bar slot used by automatically sized bars.
pub const DEFAULT_BAR_WIDTH_RATIO: f64 = 0.8;

/// Sizing rule for one bar dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum BarDimension {
    /// Width: `DEFAULT_BAR_WIDTH_RATIO` of the slot. Height: scaled by `y`.
    #[default]
    Automatic,
    /// Fixed size in pixels.
    Fixed(f64),
    /// Fraction of the available slot width or chart height.
    Ratio(f64),
}

impl BarDimension {
    /// Ratio dimension with the ratio clamped into `[0, 1]`.
    #[must_use]
    pub fn ratio(ratio: f64) -> Self {
        Self::Ratio(ratio.clamp(0.0, 1.0))
    }

    /// Resolves the dimension against the available extent.
    ///
    /// `automatic` is the size the chart would pick on its own. The result
    /// never exceeds `available`.
    #[must_use]
    pub fn resolve(self, available: f64, automatic: f64) -> f64 {
        let size = match self {
            Self::Automatic => automatic,
            Self::Fixed(px) => px,
            Self::Ratio(ratio) => available * ratio,
        };
        size.clamp(0.0, available.max(0.0))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BarDimensions {
    #[serde(default)]
    pub width: BarDimension,
    #[serde(default)]
    pub height: BarDimension,
}

impl BarDimensions {
    #[must_use]
    pub const fn new(width: BarDimension, height: BarDimension) -> Self {
        Self { width, height }
    }
}

/// Style parameters of the widget.
///
/// Purely cosmetic except `toggle_radius`, which shapes the position table,
/// and `min_count`, which bounds the selection span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(default = "default_active_color")]
    pub active_color: Color,
    #[serde(default = "default_inactive_color")]
    pub inactive_color: Color,
    #[serde(default = "default_toggle_radius")]
    pub toggle_radius: f64,
    #[serde(default = "default_slider_bar_height")]
    pub slider_bar_height: f64,
    #[serde(default)]
    pub margin: f64,
    #[serde(default = "default_min_count")]
    pub min_count: usize,
    #[serde(default)]
    pub is_hidden_chart: bool,
    #[serde(default)]
    pub bar_dimensions: BarDimensions,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            active_color: default_active_color(),
            inactive_color: default_inactive_color(),
            toggle_radius: default_toggle_radius(),
            slider_bar_height: default_slider_bar_height(),
            margin: 0.0,
            min_count: default_min_count(),
            is_hidden_chart: false,
            bar_dimensions: BarDimensions::default(),
        }
    }
}

impl SliderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_active_color(mut self, color: Color) -> Self {
        self.active_color = color;
        self
    }

    #[must_use]
    pub fn with_inactive_color(mut self, color: Color) -> Self {
        self.inactive_color = color;
        self
    }

    /// Sets the handle radius, which also pads the track on both ends.
    #[must_use]
    pub fn with_toggle_radius(mut self, toggle_radius: f64) -> Self {
        self.toggle_radius = toggle_radius;
        self
    }

    #[must_use]
    pub fn with_slider_bar_height(mut self, slider_bar_height: f64) -> Self {
        self.slider_bar_height = slider_bar_height;
        self
    }

    /// Sets extra spacing between the chart and the slider.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the minimum selectable element count, floored at one.
    #[must_use]
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count.max(1);
        self
    }

    #[must_use]
    pub fn with_hidden_chart(mut self, is_hidden_chart: bool) -> Self {
        self.is_hidden_chart = is_hidden_chart;
        self
    }

    #[must_use]
    pub fn with_bar_dimensions(mut self, width: BarDimension, height: BarDimension) -> Self {
        self.bar_dimensions = BarDimensions::new(width, height);
        self
    }

    pub fn validate(&self) -> SliderResult<()> {
        validate_slider_config(self)
    }

    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SliderError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_active_color() -> Color {
    Color::BLACK
}

fn default_inactive_color() -> Color {
    Color::GRAY
}

fn default_toggle_radius() -> f64 {
    8.0
}

fn default_slider_bar_height() -> f64 {
    8.0
}

fn default_min_count() -> usize {
    1
}
