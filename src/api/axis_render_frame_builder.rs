use crate::render::{
    CanvasLayerKind, LayeredRenderFrame, LinePrimitive, RectPrimitive, Renderer, TextHAlign,
    TextPrimitive, TextVAlign,
};

use super::ParallelEngine;

impl<R: Renderer> ParallelEngine<R> {
    /// Overlay pass: per axis group its domain line and ticks, the brush
    /// selection, then the dimension label.
    pub(super) fn push_axis_overlay(&self, frame: &mut LayeredRenderFrame) {
        let model = &self.core.model;
        let style = self.core.presentation.render_style;
        let area = model.plot_area;
        let dragging = model.interaction.label_drag();
        let half_width = self.core.behavior.brush_half_width_px;

        for group in &model.axis_groups {
            let x = area.left + group.x;
            let (top, bottom) = (area.top, area.bottom());
            let tick_left = x - style.tick_size_px;

            frame.push_line(
                CanvasLayerKind::Axis,
                LinePrimitive::new(x, top, x, bottom, style.axis_line_width, style.axis_line_color),
            );
            for y in [top, bottom] {
                frame.push_line(
                    CanvasLayerKind::Axis,
                    LinePrimitive::new(
                        tick_left,
                        y,
                        x,
                        y,
                        style.axis_line_width,
                        style.axis_line_color,
                    ),
                );
            }
            for tick in &group.ticks {
                let y = top + tick.y;
                frame.push_line(
                    CanvasLayerKind::Axis,
                    LinePrimitive::new(
                        tick_left,
                        y,
                        x,
                        y,
                        style.axis_line_width,
                        style.axis_line_color,
                    ),
                );
                if tick.label.is_empty() {
                    continue;
                }
                frame.push_text(
                    CanvasLayerKind::Axis,
                    TextPrimitive::new(
                        tick.label.clone(),
                        tick_left - style.tick_label_padding_px,
                        y,
                        style.tick_label_font_size_px,
                        style.tick_label_color,
                        TextHAlign::Right,
                    ),
                );
            }

            let selection = model
                .brush_widgets
                .get(group.dimension.raw())
                .and_then(|widget| widget.selection());
            if let Some(selection) = selection {
                frame.push_rect(
                    CanvasLayerKind::Brush,
                    RectPrimitive::new(
                        x - half_width,
                        top + selection.top,
                        half_width * 2.0,
                        selection.height(),
                        style.brush_fill_color,
                    )
                    .with_border(style.brush_border_width, style.brush_border_color),
                );
            }

            if group.title.is_empty() {
                continue;
            }
            let (label_x, label_color) = match dragging {
                Some(state) if state.dimension == group.dimension => (
                    area.left + state.pointer_x,
                    style
                        .dimension_label_color
                        .with_opacity(style.dragging_label_opacity),
                ),
                _ => (x, style.dimension_label_color),
            };
            frame.push_text(
                CanvasLayerKind::Labels,
                TextPrimitive::new(
                    group.title.clone(),
                    label_x,
                    top - style.dimension_label_offset_px,
                    style.dimension_label_font_size_px,
                    label_color,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Baseline),
            );
        }
    }
}
