use crate::error::ParcoordResult;
use crate::render::Renderer;

use super::validation::validate_render_style;
use super::{RenderStyle, engine_core::EngineCore, render_coordinator::RenderCoordinator};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ParallelEngine` owns the dataset, the authoritative dimension order, the
/// per-dimension scales, the coordinate cache, the brush filter and the hover
/// focus, and drives coalesced redraws through its renderer.
pub struct ParallelEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> ParallelEngine<R> {
    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.core.presentation.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ParcoordResult<()> {
        validate_render_style(style)?;
        self.core.presentation.render_style = style;
        self.rebuild_axis_groups();
        self.invalidate_full();
        Ok(())
    }

    #[must_use]
    pub fn legend_title(&self) -> &str {
        &self.core.presentation.legend_title
    }

    pub fn set_legend_title(&mut self, title: impl Into<String>) {
        self.core.presentation.legend_title = title.into();
        self.invalidate_full();
    }

    /// Draws the current state now, regardless of frame pacing.
    pub fn render(&mut self) -> ParcoordResult<()> {
        RenderCoordinator::render(self)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ParcoordResult<()>
    where
        R: CairoContextRenderer,
    {
        RenderCoordinator::render_on_cairo_context(self, context)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
