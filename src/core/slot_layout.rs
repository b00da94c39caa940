use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Outer padding, in steps, applied before the first and after the last slot.
pub const SLOT_PADDING: f64 = 0.5;

/// Evenly spaced horizontal axis slots across the plotting width.
///
/// With `n` slots, slot `i` sits at `width * (i + 0.5) / n`, so the first and
/// last axes keep half a step away from the plot edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotLayout {
    plot_width: f64,
    count: usize,
}

impl SlotLayout {
    #[must_use]
    pub fn new(plot_width: f64, count: usize) -> Self {
        Self { plot_width, count }
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.plot_width
    }

    #[must_use]
    pub fn step(self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let padded = (self.count - 1) as f64 + 2.0 * SLOT_PADDING;
        self.plot_width / padded
    }

    /// Plot-local x of slot `index`, or `None` past the last slot.
    #[must_use]
    pub fn position(self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.step() * (SLOT_PADDING + index as f64))
    }

    #[must_use]
    pub fn positions(self) -> Vec<f64> {
        (0..self.count).filter_map(|index| self.position(index)).collect()
    }

    /// Finds the slot closest to plot-local `x`.
    ///
    /// `x` is clamped to `[0, plot_width]` first, so drops outside the plot
    /// resolve to the nearest edge slot. On equal distance the leftmost slot
    /// wins.
    #[must_use]
    pub fn nearest_slot(self, x: f64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let clamped = if x.is_nan() {
            0.0
        } else {
            x.clamp(0.0, self.plot_width)
        };
        (0..self.count).min_by_key(|index| {
            let position = self.position(*index).unwrap_or_default();
            OrderedFloat((position - clamped).abs())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SlotLayout;

    #[test]
    fn slots_use_half_step_padding() {
        let layout = SlotLayout::new(400.0, 4);
        assert_eq!(layout.positions(), vec![50.0, 150.0, 250.0, 350.0]);
        assert_eq!(SlotLayout::new(400.0, 1).positions(), vec![200.0]);
        assert!(SlotLayout::new(400.0, 0).positions().is_empty());
    }

    #[test]
    fn nearest_slot_clamps_out_of_bounds_drops() {
        let layout = SlotLayout::new(400.0, 4);
        assert_eq!(layout.nearest_slot(-500.0), Some(0));
        assert_eq!(layout.nearest_slot(10_000.0), Some(3));
        assert_eq!(layout.nearest_slot(160.0), Some(1));
    }

    #[test]
    fn equidistant_drop_prefers_leftmost_slot() {
        let layout = SlotLayout::new(400.0, 4);
        assert_eq!(layout.nearest_slot(100.0), Some(0));
        assert_eq!(layout.nearest_slot(200.0), Some(1));
    }
}
