use crate::error::{ParcoordError, ParcoordResult};

use super::RenderStyle;

fn validate_positive(name: &str, value: f64) -> ParcoordResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ParcoordError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_non_negative(name: &str, value: f64) -> ParcoordResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ParcoordError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn validate_opacity(name: &str, value: f64) -> ParcoordResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ParcoordError::InvalidData(format!(
            "{name} must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

pub(super) fn validate_render_style(style: RenderStyle) -> ParcoordResult<RenderStyle> {
    style.color_ramp.validate()?;
    style.fallback_line_color.validate()?;
    style.axis_line_color.validate()?;
    style.tick_label_color.validate()?;
    style.dimension_label_color.validate()?;
    style.brush_fill_color.validate()?;
    style.brush_border_color.validate()?;
    style.legend_border_color.validate()?;
    style.legend_label_color.validate()?;

    validate_positive("line stroke width", style.line_stroke_width)?;
    validate_positive("highlight stroke width", style.highlight_stroke_width)?;
    validate_positive("axis line width", style.axis_line_width)?;
    validate_positive("tick label font size", style.tick_label_font_size_px)?;
    validate_positive(
        "dimension label font size",
        style.dimension_label_font_size_px,
    )?;
    validate_positive("legend width", style.legend_width_px)?;
    validate_positive("legend label font size", style.legend_label_font_size_px)?;
    validate_positive("legend title font size", style.legend_title_font_size_px)?;

    validate_non_negative("tick size", style.tick_size_px)?;
    validate_non_negative("tick label padding", style.tick_label_padding_px)?;
    validate_non_negative("dimension label offset", style.dimension_label_offset_px)?;
    validate_non_negative("brush border width", style.brush_border_width)?;
    validate_non_negative("legend offset", style.legend_offset_px)?;

    validate_opacity("line opacity", style.line_opacity)?;
    validate_opacity("dimmed line opacity", style.dimmed_line_opacity)?;
    validate_opacity("highlight opacity", style.highlight_opacity)?;
    validate_opacity("dragging label opacity", style.dragging_label_opacity)?;

    if style.legend_bands == 0 {
        return Err(ParcoordError::InvalidData(
            "legend must use at least one band".to_owned(),
        ));
    }
    Ok(style)
}

/// Checks the display dimension list: non-empty, unique names.
pub(super) fn validate_dimension_names(names: &[String]) -> ParcoordResult<()> {
    for (index, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ParcoordError::InvalidData(format!(
                "dimension name at position {index} must not be empty"
            )));
        }
        if names[..index].contains(name) {
            return Err(ParcoordError::InvalidData(format!(
                "dimension `{name}` is listed more than once"
            )));
        }
    }
    Ok(())
}

pub(super) fn validate_pixel_tolerance(name: &str, value: f64) -> ParcoordResult<f64> {
    validate_non_negative(name, value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{validate_dimension_names, validate_render_style};
    use crate::api::RenderStyle;

    #[test]
    fn default_style_is_valid() {
        assert!(validate_render_style(RenderStyle::default()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_opacity() {
        let style = RenderStyle {
            dimmed_line_opacity: 1.5,
            ..RenderStyle::default()
        };
        assert!(validate_render_style(style).is_err());
    }

    #[test]
    fn rejects_zero_legend_bands() {
        let style = RenderStyle {
            legend_bands: 0,
            ..RenderStyle::default()
        };
        assert!(validate_render_style(style).is_err());
    }

    #[test]
    fn dimension_names_must_be_unique_and_non_empty() {
        let ok = vec!["A".to_owned(), "B".to_owned()];
        assert!(validate_dimension_names(&ok).is_ok());

        let duplicate = vec!["A".to_owned(), "A".to_owned()];
        assert!(validate_dimension_names(&duplicate).is_err());

        let blank = vec!["A".to_owned(), " ".to_owned()];
        assert!(validate_dimension_names(&blank).is_err());
    }
}
