use serde::{Deserialize, Serialize};

use crate::core::DivergingColorRamp;
use crate::render::Color;

/// Immutable visual configuration of the bitmap and overlay passes.
///
/// Replaced wholesale through `set_render_style`; every field is validated
/// before the engine accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub color_ramp: DivergingColorRamp,
    /// Stroke used when a record has no usable color value.
    pub fallback_line_color: Color,
    pub line_stroke_width: f64,
    pub line_opacity: f64,
    /// Opacity of non-focused records while a hover focus is active.
    pub dimmed_line_opacity: f64,
    pub highlight_stroke_width: f64,
    pub highlight_opacity: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub tick_size_px: f64,
    pub tick_label_padding_px: f64,
    pub tick_label_font_size_px: f64,
    pub tick_label_color: Color,
    pub dimension_label_font_size_px: f64,
    pub dimension_label_color: Color,
    /// Distance between the plot top and the dimension label baseline.
    pub dimension_label_offset_px: f64,
    pub dragging_label_opacity: f64,
    pub brush_fill_color: Color,
    pub brush_border_color: Color,
    pub brush_border_width: f64,
    pub show_legend: bool,
    pub legend_offset_px: f64,
    pub legend_width_px: f64,
    /// Number of flat bands approximating the legend gradient.
    pub legend_bands: u16,
    pub legend_border_color: Color,
    pub legend_label_font_size_px: f64,
    pub legend_label_color: Color,
    pub legend_title_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            color_ramp: DivergingColorRamp::default(),
            fallback_line_color: Color::from_rgb8(0x77, 0x77, 0x77),
            line_stroke_width: 1.2,
            line_opacity: 0.45,
            dimmed_line_opacity: 0.06,
            highlight_stroke_width: 2.6,
            highlight_opacity: 1.0,
            axis_line_color: Color::rgb(0.0, 0.0, 0.0),
            axis_line_width: 1.0,
            tick_size_px: 6.0,
            tick_label_padding_px: 3.0,
            tick_label_font_size_px: 10.0,
            tick_label_color: Color::rgb(0.0, 0.0, 0.0),
            dimension_label_font_size_px: 12.0,
            dimension_label_color: Color::rgb(0.0, 0.0, 0.0),
            dimension_label_offset_px: 12.0,
            dragging_label_opacity: 0.6,
            brush_fill_color: Color::from_rgb8(0x77, 0x77, 0x77).with_opacity(0.3),
            brush_border_color: Color::rgb(1.0, 1.0, 1.0),
            brush_border_width: 1.0,
            show_legend: true,
            legend_offset_px: 50.0,
            legend_width_px: 20.0,
            legend_bands: 48,
            legend_border_color: Color::from_rgb8(0xdd, 0xdd, 0xdd),
            legend_label_font_size_px: 11.0,
            legend_label_color: Color::from_rgb8(0x33, 0x33, 0x33),
            legend_title_font_size_px: 12.0,
        }
    }
}

impl RenderStyle {
    /// Stroke color for a normalized color position, or the fallback color.
    #[must_use]
    pub fn line_color(self, normalized: Option<f64>) -> Color {
        normalized.map_or(self.fallback_line_color, |t| self.color_ramp.color_at(t))
    }
}
