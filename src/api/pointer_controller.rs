use tracing::{trace, warn};

use crate::extensions::PluginEvent;
use crate::interaction::{BrushGesture, BrushGestureKind, OverlayHit, hit_test_overlay};
use crate::render::Renderer;

use super::{InvalidationMask, ParallelEngine};

impl<R: Renderer> ParallelEngine<R> {
    /// Pointer press in surface pixels: starts a label drag or a brush
    /// gesture when it lands on one.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            trace!("ignoring non-finite pointer_down");
            return;
        }
        self.core.model.interaction.cancel_gesture();
        let (local_x, local_y) = self.core.model.plot_area.to_local(x, y);

        match self.hit_test_overlay_local(local_x, local_y) {
            OverlayHit::Label(slot) => {
                let Some(id) = self.core.model.order.get(slot).copied() else {
                    return;
                };
                self.core
                    .model
                    .interaction
                    .start_label_drag(id, slot, local_x);
                trace!(slot, "label drag started");
                self.emit_plugin_event(PluginEvent::LabelDragStarted { slot });
                self.schedule_render(InvalidationMask::label_drag());
            }
            OverlayHit::Brush(slot) => {
                let Some(id) = self.core.model.order.get(slot).copied() else {
                    return;
                };
                let Some(widget) = self.core.model.brush_widgets.get_mut(id.raw()) else {
                    return;
                };
                let previous = *widget;
                let kind = match previous.selection() {
                    Some(selection) if selection.contains(local_y) => {
                        BrushGestureKind::Move { last_y: local_y }
                    }
                    _ => {
                        widget.clear();
                        BrushGestureKind::Create { anchor_y: local_y }
                    }
                };
                let cleared = *widget != previous;
                self.core.model.interaction.start_brush(BrushGesture {
                    dimension: id,
                    kind,
                });
                trace!(slot, kind = ?kind, "brush gesture started");
                if cleared {
                    self.on_brush();
                }
            }
            OverlayHit::None => {}
        }
    }

    /// Pointer motion with the button held.
    pub fn pointer_drag(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            trace!("ignoring non-finite pointer_drag");
            return;
        }
        self.core.model.interaction.on_pointer_move(x, y);
        let (local_x, local_y) = self.core.model.plot_area.to_local(x, y);

        if self.core.model.interaction.label_drag().is_some() {
            self.core.model.interaction.update_label_drag(local_x);
            self.schedule_render(InvalidationMask::label_drag());
        } else if let Some(gesture) = self.core.model.interaction.brush_gesture() {
            self.apply_brush_gesture(gesture, local_y);
            self.on_brush();
        }
    }

    /// Pointer release: drops a dragged label or commits a brush gesture.
    pub fn pointer_up(&mut self, x: f64, y: f64) {
        let (local_x, local_y) = if x.is_finite() && y.is_finite() {
            self.core.model.plot_area.to_local(x, y)
        } else {
            trace!("pointer_up without finite position; finishing gesture in place");
            (f64::NAN, f64::NAN)
        };

        if let Some(mut state) = self.core.model.interaction.finish_label_drag() {
            if local_x.is_finite() {
                state.pointer_x = local_x;
            }
            let from_slot = self
                .core
                .model
                .slot_of(state.dimension)
                .unwrap_or(state.origin_slot);
            let to_slot = self
                .core
                .model
                .layout
                .nearest_slot(state.pointer_x)
                .unwrap_or(from_slot);
            self.emit_plugin_event(PluginEvent::LabelDragEnded { slot: to_slot });
            if let Err(err) = self.on_reorder(from_slot, to_slot) {
                warn!(error = %err, from_slot, to_slot, "label drop failed to reorder");
            }
            // The label snaps back to its (possibly new) slot either way.
            self.schedule_render(InvalidationMask::label_drag());
            return;
        }

        if let Some(gesture) = self.core.model.interaction.finish_brush() {
            if local_y.is_finite() {
                self.apply_brush_gesture(gesture, local_y);
            }
            self.on_brush();
        }
    }

    /// Pointer motion without a button: updates hover focus.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            trace!("ignoring non-finite pointer_move");
            return;
        }
        self.core.model.interaction.on_pointer_move(x, y);
        if self.core.model.interaction.label_drag().is_some()
            || self.core.model.interaction.brush_gesture().is_some()
        {
            return;
        }
        let (local_x, local_y) = self.core.model.plot_area.to_local(x, y);
        let record = self.hit_test_record(local_x, local_y);
        self.on_hover(record);
    }

    /// Pointer left the surface: clears hover focus.
    pub fn pointer_leave(&mut self) {
        self.core.model.interaction.on_pointer_leave();
        self.on_hover(None);
    }

    /// Overlay element under plot-local `(x, y)`.
    #[must_use]
    pub fn hit_test_overlay_local(&self, x: f64, y: f64) -> OverlayHit {
        let model = &self.core.model;
        let slots: Vec<f64> = model.axis_groups.iter().map(|group| group.x).collect();
        let label_half_widths: Vec<f64> = model
            .axis_groups
            .iter()
            .map(|group| group.title_half_width)
            .collect();
        hit_test_overlay(
            x,
            y,
            &slots,
            &label_half_widths,
            self.core.behavior.brush_half_width_px,
            model.plot_area.height,
        )
    }

    fn apply_brush_gesture(&mut self, gesture: BrushGesture, local_y: f64) {
        let Some(widget) = self
            .core
            .model
            .brush_widgets
            .get_mut(gesture.dimension.raw())
        else {
            return;
        };
        match gesture.kind {
            BrushGestureKind::Create { anchor_y } => widget.select(anchor_y, local_y),
            BrushGestureKind::Move { last_y } => {
                widget.translate(local_y - last_y);
                self.core.model.interaction.update_brush_anchor(local_y);
            }
        }
    }
}
