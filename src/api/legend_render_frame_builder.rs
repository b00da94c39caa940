use crate::core::format_compact;
use crate::render::{
    CanvasLayerKind, Color, LayeredRenderFrame, RectPrimitive, Renderer, TextHAlign,
    TextPrimitive, TextVAlign,
};

use super::ParallelEngine;

const LEGEND_LABEL_GAP_PX: f64 = 10.0;
const LEGEND_LABEL_INSET_PX: f64 = 6.0;
const LEGEND_TITLE_OFFSET_PX: f64 = 12.0;
const LEGEND_TITLE_INSET_PX: f64 = 50.0;
const LEGEND_CORNER_RADIUS_PX: f64 = 4.0;

impl<R: Renderer> ParallelEngine<R> {
    /// Color legend right of the plot: gradient bar (high at the top),
    /// max/mid/min labels and a title.
    pub(super) fn push_legend(&self, frame: &mut LayeredRenderFrame) {
        let style = self.core.presentation.render_style;
        if !style.show_legend {
            return;
        }
        let area = self.core.model.plot_area;
        let domain = self.core.model.color_domain;
        let x = area.right() + style.legend_offset_px;
        let (top, height, width) = (area.top, area.height, style.legend_width_px);

        let bands = usize::from(style.legend_bands);
        let band_height = height / bands as f64;
        for band in 0..bands {
            let t = 1.0 - (band as f64 + 0.5) / bands as f64;
            frame.push_rect(
                CanvasLayerKind::Legend,
                RectPrimitive::new(
                    x,
                    top + band as f64 * band_height,
                    width,
                    band_height,
                    style.color_ramp.color_at(t),
                ),
            );
        }
        frame.push_rect(
            CanvasLayerKind::Legend,
            RectPrimitive::new(x, top, width, height, Color::rgba(0.0, 0.0, 0.0, 0.0))
                .with_border(1.0, style.legend_border_color)
                .with_corner_radius(LEGEND_CORNER_RADIUS_PX),
        );

        let label_x = x + width + LEGEND_LABEL_GAP_PX;
        for (value, y, v_align) in [
            (domain.max, top + LEGEND_LABEL_INSET_PX, TextVAlign::Top),
            (
                domain.mid,
                top + height / 2.0 - LEGEND_LABEL_INSET_PX,
                TextVAlign::Middle,
            ),
            (
                domain.min,
                top + height - LEGEND_LABEL_INSET_PX,
                TextVAlign::Baseline,
            ),
        ] {
            frame.push_text(
                CanvasLayerKind::Legend,
                TextPrimitive::new(
                    format_compact(value),
                    label_x,
                    y,
                    style.legend_label_font_size_px,
                    style.legend_label_color,
                    TextHAlign::Left,
                )
                .with_v_align(v_align),
            );
        }
        let title = &self.core.presentation.legend_title;
        if title.is_empty() {
            return;
        }
        frame.push_text(
            CanvasLayerKind::Legend,
            TextPrimitive::new(
                title.clone(),
                x + LEGEND_TITLE_INSET_PX,
                top - LEGEND_TITLE_OFFSET_PX,
                style.legend_title_font_size_px,
                style.legend_label_color,
                TextHAlign::Left,
            )
            .with_v_align(TextVAlign::Baseline)
            .bold(),
        );
    }
}
