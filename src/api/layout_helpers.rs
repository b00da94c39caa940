/// Rough text width for sans-serif labels; overlay hit regions only need an
/// estimate, not a shaped measurement.
#[must_use]
pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let font_size_px = font_size_px.max(1.0);
    text.chars().count() as f64 * font_size_px * 0.6
}

#[cfg(test)]
mod tests {
    use super::estimate_label_text_width_px;

    #[test]
    fn width_scales_with_length_and_font_size() {
        let short = estimate_label_text_width_px("Salary", 12.0);
        let long = estimate_label_text_width_px("JobOpen2030", 12.0);
        assert!(long > short);
        assert_eq!(estimate_label_text_width_px("", 12.0), 0.0);
        assert_eq!(
            estimate_label_text_width_px("abc", 20.0),
            2.0 * estimate_label_text_width_px("abc", 10.0)
        );
    }
}
