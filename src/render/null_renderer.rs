use crate::error::SliderResult;
use crate::render::{Renderer, SliderFrame};

/// No-op renderer used by tests and headless hosts.
///
/// Frames are still validated so invalid geometry is caught without a real
/// backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_bar_count: usize,
    pub last_handle_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_bar_count = frame.bars.len();
        self.last_handle_count = frame
            .slider
            .as_ref()
            .map_or(0, |slider| slider.handles.len());
        Ok(())
    }
}
