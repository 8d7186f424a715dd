use smallvec::SmallVec;

use crate::error::{SliderError, SliderResult};
use crate::render::{BarPrimitive, BarStatus, CirclePrimitive, RectPrimitive};

/// Slider geometry for one frame: track, active fill and both handles.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPrimitives {
    pub track: RectPrimitive,
    pub fill: RectPrimitive,
    pub handles: SmallVec<[CirclePrimitive; 2]>,
}

/// Backend-agnostic scene for one widget draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame {
    pub width: f64,
    pub height: f64,
    pub bars: Vec<BarPrimitive>,
    pub slider: Option<SliderPrimitives>,
}

impl SliderFrame {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            bars: Vec::new(),
            slider: None,
        }
    }

    #[must_use]
    pub fn with_bar(mut self, bar: BarPrimitive) -> Self {
        self.bars.push(bar);
        self
    }

    #[must_use]
    pub fn with_slider(mut self, slider: SliderPrimitives) -> Self {
        self.slider = Some(slider);
        self
    }

    pub fn active_bar_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bars
            .iter()
            .filter(|bar| bar.status == BarStatus::Active)
            .map(|bar| bar.index)
    }

    pub fn validate(&self) -> SliderResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(SliderError::InvalidData(
                "frame width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(SliderError::InvalidData(
                "frame height must be finite and >= 0".to_owned(),
            ));
        }

        for bar in &self.bars {
            bar.rect.validate()?;
        }
        if let Some(slider) = &self.slider {
            slider.track.validate()?;
            slider.fill.validate()?;
            for handle in &slider.handles {
                handle.validate()?;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.slider.is_none()
    }
}
