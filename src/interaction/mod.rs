use serde::{Deserialize, Serialize};

use crate::core::DimensionId;

/// Height of the band above the plot where dimension labels can be grabbed.
pub const LABEL_GRAB_BAND_PX: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    DraggingLabel,
    Brushing,
}

/// Live state of a dimension label being dragged.
///
/// `pointer_x` is plot-local; the overlay draws the label there until release,
/// after which it snaps back to its slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelDragState {
    pub dimension: DimensionId,
    pub origin_slot: usize,
    pub pointer_x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BrushGestureKind {
    /// Drawing a new selection from `anchor_y` to the pointer.
    Create { anchor_y: f64 },
    /// Dragging an existing selection; `last_y` is the previous pointer y.
    Move { last_y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushGesture {
    pub dimension: DimensionId,
    pub kind: BrushGestureKind,
}

/// Overlay region under a pointer-down, by display slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayHit {
    Label(usize),
    Brush(usize),
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Gesture {
    #[default]
    None,
    Label(LabelDragState),
    Brush(BrushGesture),
}

/// Pointer gesture state machine shared by the engine's pointer handlers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    gesture: Gesture,
    cursor: Option<(f64, f64)>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        match self.gesture {
            Gesture::None => InteractionMode::Idle,
            Gesture::Label(_) => InteractionMode::DraggingLabel,
            Gesture::Brush(_) => InteractionMode::Brushing,
        }
    }

    /// Last pointer position in surface pixels, `None` after pointer-leave.
    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
    }

    #[must_use]
    pub fn label_drag(self) -> Option<LabelDragState> {
        match self.gesture {
            Gesture::Label(state) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn brush_gesture(self) -> Option<BrushGesture> {
        match self.gesture {
            Gesture::Brush(gesture) => Some(gesture),
            _ => None,
        }
    }

    pub fn start_label_drag(&mut self, dimension: DimensionId, origin_slot: usize, pointer_x: f64) {
        self.gesture = Gesture::Label(LabelDragState {
            dimension,
            origin_slot,
            pointer_x,
        });
    }

    pub fn update_label_drag(&mut self, pointer_x: f64) {
        if let Gesture::Label(state) = &mut self.gesture {
            state.pointer_x = pointer_x;
        }
    }

    /// Ends the label drag and returns its final state.
    pub fn finish_label_drag(&mut self) -> Option<LabelDragState> {
        let state = self.label_drag()?;
        self.gesture = Gesture::None;
        Some(state)
    }

    pub fn start_brush(&mut self, gesture: BrushGesture) {
        self.gesture = Gesture::Brush(gesture);
    }

    pub fn update_brush_anchor(&mut self, last_y: f64) {
        if let Gesture::Brush(BrushGesture {
            kind: BrushGestureKind::Move { last_y: previous },
            ..
        }) = &mut self.gesture
        {
            *previous = last_y;
        }
    }

    pub fn finish_brush(&mut self) -> Option<BrushGesture> {
        let gesture = self.brush_gesture()?;
        self.gesture = Gesture::None;
        Some(gesture)
    }

    pub fn cancel_gesture(&mut self) {
        self.gesture = Gesture::None;
    }
}

/// Finds the overlay element under plot-local `(x, y)`.
///
/// Labels are tested first; each label is grabbable within
/// `label_half_widths[slot]` of its slot and [`LABEL_GRAB_BAND_PX`] above the
/// plot. Brush regions span the plot height and `±brush_half_width`.
#[must_use]
pub fn hit_test_overlay(
    x: f64,
    y: f64,
    slots: &[f64],
    label_half_widths: &[f64],
    brush_half_width: f64,
    plot_height: f64,
) -> OverlayHit {
    if !x.is_finite() || !y.is_finite() {
        return OverlayHit::None;
    }

    if (-LABEL_GRAB_BAND_PX..0.0).contains(&y) {
        let label = slots.iter().enumerate().find(|(slot, position)| {
            let half_width = label_half_widths
                .get(*slot)
                .copied()
                .unwrap_or(brush_half_width)
                .max(brush_half_width);
            (x - **position).abs() <= half_width
        });
        if let Some((slot, _)) = label {
            return OverlayHit::Label(slot);
        }
    }

    if (0.0..=plot_height).contains(&y) {
        let brush = slots
            .iter()
            .position(|position| (x - position).abs() <= brush_half_width);
        if let Some(slot) = brush {
            return OverlayHit::Brush(slot);
        }
    }

    OverlayHit::None
}

/// Shortest distance from `(px, py)` to the segment `a → b`.
#[must_use]
pub fn distance_to_segment(px: f64, py: f64, a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((px - a.0) * dx + (py - a.1) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

/// Shortest distance from `(px, py)` to a polyline; `None` for empty input.
#[must_use]
pub fn distance_to_polyline(px: f64, py: f64, points: &[(f64, f64)]) -> Option<f64> {
    match points {
        [] => None,
        [single] => Some(distance_to_segment(px, py, *single, *single)),
        _ => points
            .windows(2)
            .map(|pair| distance_to_segment(px, py, pair[0], pair[1]))
            .reduce(f64::min),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BrushGesture, BrushGestureKind, InteractionMode, InteractionState, OverlayHit,
        distance_to_polyline, distance_to_segment, hit_test_overlay,
    };
    use crate::core::DimensionId;

    #[test]
    fn label_drag_lifecycle() {
        let mut state = InteractionState::default();
        assert_eq!(state.mode(), InteractionMode::Idle);

        state.start_label_drag(DimensionId::new(2), 1, 40.0);
        assert_eq!(state.mode(), InteractionMode::DraggingLabel);
        state.update_label_drag(95.0);

        let finished = state.finish_label_drag().expect("drag state");
        assert_eq!(finished.pointer_x, 95.0);
        assert_eq!(finished.origin_slot, 1);
        assert_eq!(state.mode(), InteractionMode::Idle);
        assert!(state.finish_label_drag().is_none());
    }

    #[test]
    fn brush_move_anchor_updates() {
        let mut state = InteractionState::default();
        state.start_brush(BrushGesture {
            dimension: DimensionId::new(0),
            kind: BrushGestureKind::Move { last_y: 10.0 },
        });
        state.update_brush_anchor(25.0);
        let gesture = state.finish_brush().expect("gesture");
        assert_eq!(gesture.kind, BrushGestureKind::Move { last_y: 25.0 });
    }

    #[test]
    fn overlay_hit_prefers_labels_above_plot() {
        let slots = [100.0, 300.0];
        let widths = [30.0, 30.0];
        assert_eq!(
            hit_test_overlay(120.0, -10.0, &slots, &widths, 14.0, 200.0),
            OverlayHit::Label(0)
        );
        assert_eq!(
            hit_test_overlay(310.0, 50.0, &slots, &widths, 14.0, 200.0),
            OverlayHit::Brush(1)
        );
        assert_eq!(
            hit_test_overlay(200.0, 50.0, &slots, &widths, 14.0, 200.0),
            OverlayHit::None
        );
        assert_eq!(
            hit_test_overlay(100.0, 260.0, &slots, &widths, 14.0, 200.0),
            OverlayHit::None
        );
    }

    #[test]
    fn polyline_distance_uses_closest_segment() {
        assert_eq!(distance_to_segment(5.0, 3.0, (0.0, 0.0), (10.0, 0.0)), 3.0);
        assert_eq!(distance_to_segment(-4.0, 3.0, (0.0, 0.0), (10.0, 0.0)), 5.0);
        let points = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)];
        assert_eq!(distance_to_polyline(12.0, 5.0, &points), Some(2.0));
        assert_eq!(distance_to_polyline(0.0, 0.0, &[]), None);
    }
}
