use serde::{Deserialize, Serialize};

use crate::error::{ParcoordError, ParcoordResult};

/// Pixel size shared by the bitmap surface and the vector overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plotting area for labels, ticks and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 36.0,
            right: 110.0,
            bottom: 18.0,
            left: 48.0,
        }
    }
}

impl PlotMargins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ParcoordResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParcoordError::InvalidData(format!(
                    "plot margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Inner plotting rectangle in surface pixels.
///
/// Coordinates cached by the engine are plot-local: `(0, 0)` is the top-left
/// corner of this rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Resolves the plotting rectangle and rejects layouts without drawable space.
    pub fn resolve(viewport: Viewport, margins: PlotMargins) -> ParcoordResult<Self> {
        if !viewport.is_valid() {
            return Err(ParcoordError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = margins.validate()?;
        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ParcoordError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn to_surface(self, local_x: f64, local_y: f64) -> (f64, f64) {
        (local_x + self.left, local_y + self.top)
    }

    #[must_use]
    pub fn to_local(self, surface_x: f64, surface_y: f64) -> (f64, f64) {
        (surface_x - self.left, surface_y - self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::{PlotArea, PlotMargins, Viewport};
    use crate::error::ParcoordError;

    #[test]
    fn plot_area_subtracts_margins() {
        let area = PlotArea::resolve(Viewport::new(1000, 550), PlotMargins::default())
            .expect("valid plot area");
        assert_eq!(area.width, 842.0);
        assert_eq!(area.height, 496.0);
        assert_eq!(area.to_surface(0.0, 0.0), (48.0, 36.0));
        assert_eq!(area.to_local(48.0, 36.0), (0.0, 0.0));
    }

    #[test]
    fn plot_area_rejects_margins_larger_than_surface() {
        let err = PlotArea::resolve(Viewport::new(100, 40), PlotMargins::default())
            .expect_err("no drawable area");
        assert!(matches!(err, ParcoordError::InvalidViewport { .. }));
    }

    #[test]
    fn negative_margin_is_rejected() {
        let margins = PlotMargins::new(-1.0, 0.0, 0.0, 0.0);
        assert!(margins.validate().is_err());
    }
}
