use crate::core::Viewport;
use crate::error::{ParcoordError, ParcoordResult};
use crate::render::{LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one surface draw pass.
///
/// Backends draw polylines first, then rects, lines and texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub polylines: Vec<PolylinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            polylines: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ParcoordResult<()> {
        if !self.viewport.is_valid() {
            return Err(ParcoordError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
            && self.lines.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;
    use crate::render::{
        Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
    };

    #[test]
    fn builder_frame_validates() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let frame = RenderFrame::new(Viewport::new(200, 100))
            .with_polyline(PolylinePrimitive::new([(10.0, 10.0), (50.0, 80.0)], 1.2, black))
            .with_line(LinePrimitive::new(20.0, 0.0, 20.0, 90.0, 1.0, black))
            .with_rect(RectPrimitive::new(6.0, 10.0, 28.0, 40.0, black.with_opacity(0.3)))
            .with_text(TextPrimitive::new("A", 20.0, 8.0, 12.0, black, TextHAlign::Center));

        assert!(!frame.is_empty());
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn non_finite_vertex_fails_validation() {
        let frame = RenderFrame::new(Viewport::new(200, 100)).with_polyline(
            PolylinePrimitive::new([(0.0, f64::NAN), (5.0, 1.0)], 1.2, Color::rgb(1.0, 0.0, 0.0)),
        );
        assert!(frame.validate().is_err());
        assert!(RenderFrame::new(Viewport::new(0, 100)).validate().is_err());
    }
}
