use std::hash::Hash;

use smallvec::smallvec;
use tracing::trace;

use crate::core::GraphRangeElement;
use crate::error::SliderResult;
use crate::render::{
    BarPrimitive, BarStatus, CirclePrimitive, RectPrimitive, Renderer, SliderFrame,
    SliderPrimitives,
};

use super::config_validation::validate_frame_height;
use super::{DEFAULT_BAR_WIDTH_RATIO, GraphRangeSlider};

impl<T, Id> GraphRangeSlider<T, Id>
where
    T: Clone + GraphRangeElement,
    Id: Hash + Eq,
{
    /// Builds the draw commands for a container of the current width and
    /// the given `height`.
    ///
    /// The slider occupies the bottom `2 * radius` pixels. The chart sits
    /// above it, inset by `2 * radius` horizontally and by
    /// `radius + bar_height / 2 + margin` from the bottom.
    pub fn build_frame(&self, height: f64) -> SliderResult<SliderFrame> {
        validate_frame_height(height)?;

        let width = self.container_width;
        let mut frame = SliderFrame::new(width, height);
        if !self.config.is_hidden_chart {
            frame = self
                .build_bars(height)
                .into_iter()
                .fold(frame, SliderFrame::with_bar);
        }
        if let Some(slider) = self.build_slider(height) {
            frame = frame.with_slider(slider);
        }

        trace!(
            bars = frame.bars.len(),
            slider = frame.slider.is_some(),
            "built slider frame"
        );
        Ok(frame)
    }

    /// Builds a frame and hands it to `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R, height: f64) -> SliderResult<()> {
        let frame = self.build_frame(height)?;
        renderer.render(&frame)
    }

    fn build_bars(&self, height: f64) -> Vec<BarPrimitive> {
        let count = self.data.len();
        if count == 0 {
            return Vec::new();
        }

        let radius = self.config.toggle_radius;
        let chart_left = radius * 2.0;
        let chart_width = (self.container_width - radius * 4.0).max(0.0);
        let chart_bottom = (height
            - (radius + self.config.slider_bar_height * 0.5 + self.config.margin))
            .max(0.0);
        let slot = chart_width / count as f64;
        let max_y = self
            .data
            .iter()
            .map(|element| element.y())
            .filter(|y| y.is_finite())
            .fold(0.0_f64, f64::max);
        let range = self.state.range();

        self.data
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let dimensions = self.bar_dimensions_for(index);
                let bar_width = dimensions
                    .width
                    .resolve(slot, slot * DEFAULT_BAR_WIDTH_RATIO);
                let scaled = if max_y > 0.0 && element.y().is_finite() {
                    element.y().max(0.0) / max_y * chart_bottom
                } else {
                    0.0
                };
                let bar_height = dimensions.height.resolve(chart_bottom, scaled);

                let (status, color) = if range.contains(index) {
                    (BarStatus::Active, self.config.active_color)
                } else {
                    (BarStatus::Inactive, self.config.inactive_color)
                };
                let x = chart_left + slot * index as f64 + (slot - bar_width) * 0.5;
                BarPrimitive {
                    index,
                    status,
                    rect: RectPrimitive::new(
                        x,
                        chart_bottom - bar_height,
                        bar_width,
                        bar_height,
                        color,
                    ),
                }
            })
            .collect()
    }

    fn build_slider(&self, height: f64) -> Option<SliderPrimitives> {
        let range = self.state.range();
        let left = self.positions.get(range.left)?;
        let right = self.positions.get(range.right)?;

        let radius = self.config.toggle_radius;
        let bar_height = self.config.slider_bar_height;
        let center_y = height - radius;
        let bar_top = center_y - bar_height * 0.5;

        let track = RectPrimitive::new(
            radius,
            bar_top,
            (self.container_width - radius * 2.0).max(0.0),
            bar_height,
            self.config.inactive_color,
        )
        .with_corner_radius(bar_height * 0.5);
        let fill = RectPrimitive::new(
            left + radius,
            bar_top,
            (right - left).max(0.0),
            bar_height,
            self.config.active_color,
        );
        let handles = smallvec![
            CirclePrimitive::new(left + radius, center_y, radius, self.config.active_color),
            CirclePrimitive::new(right + radius, center_y, radius, self.config.active_color),
        ];

        Some(SliderPrimitives {
            track,
            fill,
            handles,
        })
    }
}
