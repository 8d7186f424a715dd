//! graph-range-slider: a bar chart paired with a dual-handle range slider.
//!
//! The crate keeps handle positions, selected indices and bar highlighting
//! consistent across resizes, data replacement and pointer drags. Drawing is
//! left to a `render::Renderer` backend fed with backend-agnostic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GraphRangeSlider, SliderConfig};
pub use error::{SliderError, SliderResult};
