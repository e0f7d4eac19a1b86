use crate::error::MapResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless map usage.
///
/// It still validates frame content so invalid geometry surfaces in tests.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_marker_count: usize,
    pub last_polygon_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> MapResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_marker_count = frame.map_layer.circles.len();
        self.last_polygon_count = frame.map_layer.polygons.len();
        self.last_text_count = frame.map_layer.texts.len() + frame.overlay_layer.texts.len();
        Ok(())
    }
}
