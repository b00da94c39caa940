use serde::{Deserialize, Serialize};

/// Output surface: the bitmap layer holds record polylines, the vector
/// overlay holds axes, labels, brush widgets and the legend.
///
/// Both surfaces share one coordinate space and are composited bitmap first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Bitmap,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    /// Filtered record polylines at base or dimmed opacity.
    Lines,
    /// The hover-focused record, drawn last on the bitmap.
    Highlight,
    Legend,
    Axis,
    Brush,
    /// Dimension labels, including a label being dragged.
    Labels,
}

impl CanvasLayerKind {
    #[must_use]
    pub const fn surface(self) -> SurfaceKind {
        match self {
            Self::Lines | Self::Highlight => SurfaceKind::Bitmap,
            Self::Legend | Self::Axis | Self::Brush | Self::Labels => SurfaceKind::Overlay,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Lines,
                CanvasLayerKind::Highlight,
                CanvasLayerKind::Legend,
                CanvasLayerKind::Axis,
                CanvasLayerKind::Brush,
                CanvasLayerKind::Labels,
            ],
        }
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasLayerKind, LayerStack, SurfaceKind};

    #[test]
    fn canonical_stack_puts_bitmap_layers_first() {
        let stack = LayerStack::canonical();
        let first_overlay = stack
            .layers
            .iter()
            .position(|layer| layer.surface() == SurfaceKind::Overlay)
            .expect("overlay layer");
        assert!(
            stack.layers[..first_overlay]
                .iter()
                .all(|layer| layer.surface() == SurfaceKind::Bitmap)
        );
        assert_eq!(stack.layers.last(), Some(&CanvasLayerKind::Labels));
    }
}
