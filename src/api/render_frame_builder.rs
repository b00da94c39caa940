use crate::error::ParcoordResult;
use crate::render::{LayeredRenderFrame, Renderer};

use super::ParallelEngine;

impl<R: Renderer> ParallelEngine<R> {
    /// Materializes the current state as a validated two-surface frame in
    /// surface pixels.
    ///
    /// Pure with respect to engine state: equal state yields equal frames.
    pub fn build_render_frame(&self) -> ParcoordResult<LayeredRenderFrame> {
        let mut frame = LayeredRenderFrame::new(self.core.model.viewport);
        self.push_record_polylines(&mut frame);
        self.push_axis_overlay(&mut frame);
        self.push_legend(&mut frame);
        frame.validate()?;
        Ok(frame)
    }
}
