use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::record::Record;
use crate::core::scale::LinearScale;

/// Inclusive `[min, max]` filter interval in a dimension's value domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRange {
    pub min: f64,
    pub max: f64,
}

impl BrushRange {
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Active filters keyed by dimension name.
///
/// A missing key means "no filter" on that dimension. The set is always
/// rebuilt from the brush widgets as a whole, never patched entry by entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrushRangeSet {
    ranges: IndexMap<String, BrushRange>,
}

impl BrushRangeSet {
    /// Rebuilds the set from `(dimension name, scale, widget)` triples.
    pub fn from_widgets<'a, I>(widgets: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, LinearScale, &'a BrushWidget)>,
    {
        let ranges = widgets
            .into_iter()
            .filter_map(|(name, scale, widget)| {
                widget.range(scale).map(|range| (name.to_owned(), range))
            })
            .collect();
        Self { ranges }
    }

    #[must_use]
    pub fn get(&self, dimension: &str) -> Option<BrushRange> {
        self.ranges.get(dimension).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, BrushRange)> {
        self.ranges.iter().map(|(name, range)| (name.as_str(), *range))
    }

    /// Returns `true` when `record` lies inside every active range.
    ///
    /// A record without a finite value on a filtered dimension is excluded.
    #[must_use]
    pub fn passes(&self, record: &Record) -> bool {
        self.ranges.iter().all(|(dimension, range)| {
            record
                .value(dimension)
                .is_some_and(|value| range.contains(value))
        })
    }
}

/// Vertical pixel selection `[top, bottom]` in plot-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSelection {
    pub top: f64,
    pub bottom: f64,
}

impl BrushSelection {
    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn contains(self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }
}

/// Per-axis brush widget constrained to `[0, extent_height]` vertically and
/// `±half_width` around the axis horizontally.
///
/// A brush set from values keeps that exact interval as its filter; the
/// pixel selection is then only what gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushWidget {
    extent_height: f64,
    half_width: f64,
    selection: Option<BrushSelection>,
    value_range: Option<BrushRange>,
}

impl BrushWidget {
    #[must_use]
    pub fn new(extent_height: f64, half_width: f64) -> Self {
        Self {
            extent_height,
            half_width,
            selection: None,
            value_range: None,
        }
    }

    #[must_use]
    pub fn half_width(self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn extent_height(self) -> f64 {
        self.extent_height
    }

    #[must_use]
    pub fn selection(self) -> Option<BrushSelection> {
        self.selection
    }

    /// Sets the selection from two pixel positions in any order, clamped to
    /// the extent. A zero-height selection clears the widget.
    pub fn select(&mut self, y0: f64, y1: f64) {
        self.value_range = None;
        if !y0.is_finite() || !y1.is_finite() {
            self.selection = None;
            return;
        }
        self.selection = self.clamped_selection(y0, y1);
    }

    /// Sets the filter to the inclusive value interval `[a, b]` (any order).
    ///
    /// The drawn selection is `scale` applied to the interval and clamped to
    /// the extent; it is absent when nothing of the interval is on the axis.
    pub fn select_values(&mut self, a: f64, b: f64, scale: LinearScale) {
        if !a.is_finite() || !b.is_finite() {
            self.clear();
            return;
        }
        let range = BrushRange::new(a, b);
        self.selection = self.clamped_selection(scale.map(range.min), scale.map(range.max));
        self.value_range = Some(range);
    }

    pub fn clear(&mut self) {
        self.selection = None;
        self.value_range = None;
    }

    fn clamped_selection(self, y0: f64, y1: f64) -> Option<BrushSelection> {
        let top = y0.min(y1).clamp(0.0, self.extent_height);
        let bottom = y0.max(y1).clamp(0.0, self.extent_height);
        (bottom > top).then_some(BrushSelection { top, bottom })
    }

    /// Shifts the selection by `dy`, keeping its height inside the extent.
    ///
    /// A moved selection filters by its pixels again.
    pub fn translate(&mut self, dy: f64) {
        let Some(selection) = self.selection else {
            return;
        };
        if !dy.is_finite() {
            return;
        }
        self.value_range = None;
        let height = selection.height();
        let top = (selection.top + dy).clamp(0.0, self.extent_height - height);
        self.selection = Some(BrushSelection {
            top,
            bottom: top + height,
        });
    }

    /// Active filter interval: the value interval when one was set,
    /// otherwise the pixel selection inverted through `scale`.
    ///
    /// The scale range is inverted, so the bottom pixel yields the minimum.
    #[must_use]
    pub fn range(self, scale: LinearScale) -> Option<BrushRange> {
        if let Some(range) = self.value_range {
            return Some(range);
        }
        let selection = self.selection?;
        Some(BrushRange::new(
            scale.invert(selection.bottom),
            scale.invert(selection.top),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{BrushRange, BrushRangeSet, BrushWidget};
    use crate::core::{LinearScale, Record};

    #[test]
    fn range_is_inclusive() {
        let range = BrushRange::new(2.0, 1.0);
        assert_eq!((range.min, range.max), (1.0, 2.0));
        assert!(range.contains(1.0));
        assert!(range.contains(2.0));
        assert!(!range.contains(2.000_001));
    }

    #[test]
    fn widget_selection_inverts_through_scale() {
        let scale = LinearScale::vertical((0.0, 10.0), 100.0).expect("scale");
        let mut widget = BrushWidget::new(100.0, 14.0);
        widget.select(80.0, 20.0);

        let range = widget.range(scale).expect("active range");
        assert!((range.min - 2.0).abs() < 1e-9);
        assert!((range.max - 8.0).abs() < 1e-9);
    }

    #[test]
    fn value_interval_is_kept_exactly() {
        let scale = LinearScale::vertical((0.0, 1.0), 380.0).expect("scale");
        let mut widget = BrushWidget::new(380.0, 14.0);
        widget.select_values(0.3, 0.1, scale);

        assert_eq!(widget.range(scale), Some(BrushRange::new(0.1, 0.3)));
        let selection = widget.selection().expect("drawn selection");
        assert!((selection.top - scale.map(0.3)).abs() < 1e-9);
        assert!((selection.bottom - scale.map(0.1)).abs() < 1e-9);

        widget.translate(-10.0);
        let moved = widget.range(scale).expect("moved range");
        assert!(moved.max > 0.3);
    }

    #[test]
    fn value_interval_off_the_axis_still_filters() {
        let scale = LinearScale::vertical((0.0, 1.0), 100.0).expect("scale");
        let mut widget = BrushWidget::new(100.0, 14.0);
        widget.select_values(2.0, 3.0, scale);

        assert!(widget.selection().is_none());
        assert_eq!(widget.range(scale), Some(BrushRange::new(2.0, 3.0)));

        widget.clear();
        assert_eq!(widget.range(scale), None);
    }

    #[test]
    fn zero_height_selection_clears_widget() {
        let mut widget = BrushWidget::new(100.0, 14.0);
        widget.select(10.0, 40.0);
        assert!(widget.selection().is_some());
        widget.select(30.0, 30.0);
        assert!(widget.selection().is_none());
    }

    #[test]
    fn translate_keeps_selection_inside_extent() {
        let mut widget = BrushWidget::new(100.0, 14.0);
        widget.select(10.0, 40.0);
        widget.translate(500.0);
        let selection = widget.selection().expect("selection");
        assert_eq!((selection.top, selection.bottom), (70.0, 100.0));
        widget.translate(-500.0);
        let selection = widget.selection().expect("selection");
        assert_eq!((selection.top, selection.bottom), (0.0, 30.0));
    }

    #[test]
    fn range_set_requires_every_active_dimension() {
        let scale = LinearScale::vertical((0.0, 10.0), 100.0).expect("scale");
        let mut a = BrushWidget::new(100.0, 14.0);
        a.select(0.0, 50.0);
        let b = BrushWidget::new(100.0, 14.0);
        let set = BrushRangeSet::from_widgets([("A", scale, &a), ("B", scale, &b)]);

        assert_eq!(set.len(), 1);
        assert!(set.get("B").is_none());
        assert!(set.passes(&Record::new(0usize, 0.0).with_value("A", 7.0)));
        assert!(!set.passes(&Record::new(1usize, 0.0).with_value("A", 3.0)));
        assert!(!set.passes(&Record::new(2usize, 0.0)));
    }
}
