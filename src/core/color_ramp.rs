use serde::{Deserialize, Serialize};

use crate::core::record::Dataset;
use crate::error::ParcoordResult;
use crate::render::Color;

/// Raw min / max / midpoint of the color dimension.
///
/// Recorded from the data without nicing; used for color normalization and
/// legend labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorDomain {
    pub min: f64,
    pub max: f64,
    pub mid: f64,
}

impl Default for ColorDomain {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl ColorDomain {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            mid: (min + max) / 2.0,
        }
    }

    #[must_use]
    pub fn from_dataset(dataset: &Dataset, color_dimension: &str) -> Self {
        dataset
            .color_extent(color_dimension)
            .map_or_else(Self::default, |(min, max)| Self::new(min, max))
    }

    /// Normalizes `value` into `[0, 1]`, clamping at the edges.
    ///
    /// A zero-span domain divides by `1` instead. Non-finite values have no
    /// position on the ramp.
    #[must_use]
    pub fn normalize(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let span = self.max - self.min;
        let denominator = if span == 0.0 { 1.0 } else { span };
        Some(((value - self.min) / denominator).clamp(0.0, 1.0))
    }
}

/// Three-stop diverging ramp: `low → mid` on `[0, 0.5]`, `mid → high` on
/// `[0.5, 1]`, interpolated per RGB channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivergingColorRamp {
    pub low: Color,
    pub mid: Color,
    pub high: Color,
}

impl Default for DivergingColorRamp {
    fn default() -> Self {
        Self {
            low: Color::from_rgb8(0xc4, 0x34, 0x24),
            mid: Color::from_rgb8(0xe1, 0xe3, 0x94),
            high: Color::from_rgb8(0x71, 0xc7, 0x95),
        }
    }
}

impl DivergingColorRamp {
    #[must_use]
    pub const fn new(low: Color, mid: Color, high: Color) -> Self {
        Self { low, mid, high }
    }

    pub fn validate(self) -> ParcoordResult<Self> {
        self.low.validate()?;
        self.mid.validate()?;
        self.high.validate()?;
        Ok(self)
    }

    /// Color at normalized position `t` (clamped to `[0, 1]`).
    ///
    /// Returns the stops exactly at `0.0`, `0.5` and `1.0`.
    #[must_use]
    pub fn color_at(self, t: f64) -> Color {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
        if t <= 0.5 {
            lerp_color(self.low, self.mid, t * 2.0)
        } else {
            lerp_color(self.mid, self.high, (t - 0.5) * 2.0)
        }
    }
}

fn lerp_color(from: Color, to: Color, t: f64) -> Color {
    Color::rgba(
        lerp(from.red, to.red, t),
        lerp(from.green, to.green, t),
        lerp(from.blue, to.blue, t),
        lerp(from.alpha, to.alpha, t),
    )
}

// Weighted form keeps both endpoints exact: t = 0 -> a, t = 1 -> b.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::{ColorDomain, DivergingColorRamp};
    use crate::core::{Dataset, Record};

    #[test]
    fn ramp_hits_stops_exactly() {
        let ramp = DivergingColorRamp::default();
        assert_eq!(ramp.color_at(0.0), ramp.low);
        assert_eq!(ramp.color_at(0.5), ramp.mid);
        assert_eq!(ramp.color_at(1.0), ramp.high);
        assert_eq!(ramp.color_at(-3.0), ramp.low);
        assert_eq!(ramp.color_at(7.0), ramp.high);
    }

    #[test]
    fn ramp_is_pure() {
        let ramp = DivergingColorRamp::default();
        for step in 0..=20 {
            let t = f64::from(step) / 20.0;
            assert_eq!(ramp.color_at(t), ramp.color_at(t));
        }
    }

    #[test]
    fn domain_defaults_on_empty_dataset() {
        let domain = ColorDomain::from_dataset(&Dataset::default(), "C");
        assert_eq!((domain.min, domain.max, domain.mid), (0.0, 1.0, 0.5));
    }

    #[test]
    fn normalize_clamps_and_handles_zero_span() {
        let domain = ColorDomain::from_dataset(
            &Dataset::new(vec![Record::new(0usize, -5.0), Record::new(1usize, 5.0)]),
            "C",
        );
        assert_eq!(domain.mid, 0.0);
        assert_eq!(domain.normalize(-5.0), Some(0.0));
        assert_eq!(domain.normalize(0.0), Some(0.5));
        assert_eq!(domain.normalize(50.0), Some(1.0));
        assert_eq!(domain.normalize(f64::NAN), None);

        let flat = ColorDomain::new(3.0, 3.0);
        assert_eq!(flat.normalize(3.0), Some(0.0));
        assert_eq!(flat.normalize(3.5), Some(0.5));
    }
}
