use crate::core::Viewport;
use crate::error::ParcoordResult;

use super::{
    CanvasLayerKind, LayerStack, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    SurfaceKind, TextPrimitive,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub polylines: Vec<PolylinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            polylines: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    fn append_to(&self, frame: &mut RenderFrame) {
        frame.polylines.extend(self.polylines.iter().cloned());
        frame.lines.extend(self.lines.iter().copied());
        frame.rects.extend(self.rects.iter().copied());
        frame.texts.extend(self.texts.iter().cloned());
    }
}

/// Two-surface scene handed to renderers once per scheduled frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: LayerStack) -> Self {
        let layers = stack
            .layers
            .into_iter()
            .map(LayerPrimitives::empty)
            .collect();
        Self { viewport, layers }
    }

    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::from_stack(viewport, LayerStack::canonical())
    }

    pub fn push_polyline(&mut self, kind: CanvasLayerKind, polyline: PolylinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.polylines.push(polyline);
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// Collects every layer of `surface` in stack order.
    #[must_use]
    pub fn flatten_surface(&self, surface: SurfaceKind) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            if layer.kind.surface() == surface {
                layer.append_to(&mut frame);
            }
        }
        frame
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            layer.append_to(&mut frame);
        }
        frame
    }

    pub fn validate(&self) -> ParcoordResult<()> {
        self.flatten_surface(SurfaceKind::Bitmap).validate()?;
        self.flatten_surface(SurfaceKind::Overlay).validate()
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
