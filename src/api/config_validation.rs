use crate::error::{SliderError, SliderResult};

use super::{BarDimension, BarDimensions, SliderConfig};

pub(super) fn validate_track_width(width: f64) -> SliderResult<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(SliderError::InvalidTrackWidth { width });
    }
    Ok(())
}

pub(super) fn validate_frame_height(height: f64) -> SliderResult<()> {
    if !height.is_finite() || height < 0.0 {
        return Err(SliderError::InvalidData(
            "frame height must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_non_negative(name: &str, value: f64) -> SliderResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SliderError::InvalidConfig(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

pub(super) fn validate_bar_dimension(name: &str, dimension: BarDimension) -> SliderResult<()> {
    match dimension {
        BarDimension::Automatic => Ok(()),
        BarDimension::Fixed(px) => validate_non_negative(name, px),
        BarDimension::Ratio(ratio) => {
            if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
                return Err(SliderError::InvalidConfig(format!(
                    "{name} ratio must be finite and in [0, 1]"
                )));
            }
            Ok(())
        }
    }
}

pub(super) fn validate_bar_dimensions(dimensions: BarDimensions) -> SliderResult<()> {
    validate_bar_dimension("bar width", dimensions.width)?;
    validate_bar_dimension("bar height", dimensions.height)
}

pub(super) fn validate_slider_config(config: &SliderConfig) -> SliderResult<()> {
    config
        .active_color
        .validate()
        .map_err(|e| SliderError::InvalidConfig(format!("active color: {e}")))?;
    config
        .inactive_color
        .validate()
        .map_err(|e| SliderError::InvalidConfig(format!("inactive color: {e}")))?;
    validate_non_negative("toggle radius", config.toggle_radius)?;
    validate_non_negative("slider bar height", config.slider_bar_height)?;
    validate_non_negative("margin", config.margin)?;
    if config.min_count == 0 {
        return Err(SliderError::InvalidConfig(
            "min count must be >= 1".to_owned(),
        ));
    }
    validate_bar_dimensions(config.bar_dimensions)
}
