use tracing::trace;

use crate::error::ParcoordResult;
use crate::render::Renderer;

use super::ParallelEngine;
use super::render_cycle_finalizer::finalize_render_cycle;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: Renderer>(engine: &mut ParallelEngine<R>) -> ParcoordResult<()> {
        let frame = engine.build_render_frame()?;
        engine.renderer.render(&frame)?;
        trace!(level = ?engine.pending_invalidation_level(), "frame rendered");
        finalize_render_cycle(engine);
        Ok(())
    }

    #[cfg(feature = "cairo-backend")]
    pub(super) fn render_on_cairo_context<R: Renderer + CairoContextRenderer>(
        engine: &mut ParallelEngine<R>,
        context: &cairo::Context,
    ) -> ParcoordResult<()> {
        let frame = engine.build_render_frame()?;
        engine.renderer.render_on_cairo_context(context, &frame)?;
        finalize_render_cycle(engine);
        Ok(())
    }
}
