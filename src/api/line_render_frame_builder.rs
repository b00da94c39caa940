use crate::core::{ProjectedRow, Record};
use crate::render::{CanvasLayerKind, Color, LayeredRenderFrame, PolylinePrimitive, Renderer};

use super::ParallelEngine;

impl<R: Renderer> ParallelEngine<R> {
    /// Bitmap pass: one polyline per record passing the brush, in dataset
    /// order, then the focused record again on the highlight layer.
    ///
    /// Any hover focus dims the other records; the highlight needs the
    /// focused record to pass the brush.
    ///
    /// Returns the number of records drawn on the lines layer.
    pub(super) fn push_record_polylines(&self, frame: &mut LayeredRenderFrame) -> usize {
        let model = &self.core.model;
        let style = self.core.presentation.render_style;
        let focus = model.hover_focus;
        let mut drawn = 0;

        for (index, record) in model.dataset.records().iter().enumerate() {
            if !model.brush_ranges.passes(record) {
                continue;
            }
            let Some(row) = model.coordinates.row(index) else {
                continue;
            };
            if row.is_empty() {
                continue;
            }
            let opacity = match focus {
                Some(focused) if focused != index => style.dimmed_line_opacity,
                _ => style.line_opacity,
            };
            let color = self.line_color_for(record).with_opacity(opacity);
            frame.push_polyline(
                CanvasLayerKind::Lines,
                self.surface_polyline(row, style.line_stroke_width, color),
            );
            drawn += 1;
        }

        if let Some(focused) = model.highlighted_hover() {
            let record = model.dataset.get(focused);
            let row = model.coordinates.row(focused);
            if let (Some(record), Some(row)) = (record, row) {
                if !row.is_empty() {
                    let color = self
                        .line_color_for(record)
                        .with_opacity(style.highlight_opacity);
                    frame.push_polyline(
                        CanvasLayerKind::Highlight,
                        self.surface_polyline(row, style.highlight_stroke_width, color),
                    );
                }
            }
        }
        drawn
    }

    fn line_color_for(&self, record: &Record) -> Color {
        let color_value = record.color_value_on(&self.core.behavior.color_dimension);
        let normalized = self.core.model.color_domain.normalize(color_value);
        self.core.presentation.render_style.line_color(normalized)
    }

    fn surface_polyline(
        &self,
        row: &ProjectedRow,
        stroke_width: f64,
        color: Color,
    ) -> PolylinePrimitive {
        let area = self.core.model.plot_area;
        PolylinePrimitive::new(
            row.iter().map(|point| area.to_surface(point.x, point.y)),
            stroke_width,
            color,
        )
    }
}
