mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use layer_stack::{CanvasLayerKind, LayerStack, SurfaceKind};
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::ParcoordResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic two-surface frame so
/// drawing code stays isolated from brushing, reordering and hover logic.
/// Implementations clear the bitmap surface before drawing its layers and
/// composite the overlay on top.
pub trait Renderer {
    fn render(&mut self, frame: &LayeredRenderFrame) -> ParcoordResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
