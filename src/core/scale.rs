use serde::{Deserialize, Serialize};

use crate::core::ticks::{NICE_TICK_COUNT, nice_domain, tick_step, ticks};
use crate::error::{ParcoordError, ParcoordResult};

/// Continuous linear mapping from a value domain to a pixel range.
///
/// Dimension scales use an inverted range (`[plot_height, 0]`) so the domain
/// minimum lands at the bottom of the axis. A zero-span domain is allowed and
/// maps every value to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ParcoordResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ParcoordError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
            return Err(ParcoordError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Builds the vertical scale of one axis: `domain.0` at `plot_height`,
    /// `domain.1` at `0`.
    pub fn vertical(domain: (f64, f64), plot_height: f64) -> ParcoordResult<Self> {
        Self::new(domain, (plot_height, 0.0))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_zero_span(self) -> bool {
        self.domain_start == self.domain_end
    }

    /// Extends the domain to round tick boundaries.
    #[must_use]
    pub fn nice(self) -> Self {
        let (domain_start, domain_end) =
            nice_domain(self.domain_start, self.domain_end, NICE_TICK_COUNT);
        Self {
            domain_start,
            domain_end,
            ..self
        }
    }

    /// Maps a domain value to a pixel position.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) * 0.5;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel position back into the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        ticks(self.domain_start, self.domain_end, count)
    }

    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        if self.is_zero_span() {
            return 1.0;
        }
        tick_step(self.domain_start, self.domain_end, count)
    }
}
