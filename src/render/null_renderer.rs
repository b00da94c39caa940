use crate::error::ParcoordResult;
use crate::render::{LayeredRenderFrame, Renderer, SurfaceKind};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend draws it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_polyline_count: usize,
    pub last_overlay_line_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &LayeredRenderFrame) -> ParcoordResult<()> {
        frame.validate()?;
        let bitmap = frame.flatten_surface(SurfaceKind::Bitmap);
        let overlay = frame.flatten_surface(SurfaceKind::Overlay);
        self.frames_rendered += 1;
        self.last_polyline_count = bitmap.polylines.len();
        self.last_overlay_line_count = overlay.lines.len();
        self.last_text_count = overlay.texts.len();
        Ok(())
    }
}
