mod frame;
mod null_renderer;
mod primitives;

pub use frame::{SliderFrame, SliderPrimitives};
pub use null_renderer::NullRenderer;
pub use primitives::{BarPrimitive, BarStatus, CirclePrimitive, Color, RectPrimitive};

use crate::error::SliderResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `SliderFrame`; selection and
/// geometry logic never reaches into them.
pub trait Renderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()>;
}
