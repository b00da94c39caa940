use smallvec::SmallVec;
use tracing::trace;

use crate::core::Record;
use crate::error::{ParcoordError, ParcoordResult};
use crate::extensions::PluginEvent;
use crate::interaction::distance_to_polyline;
use crate::render::Renderer;

use super::{InvalidationMask, ParallelEngine};

impl<R: Renderer> ParallelEngine<R> {
    /// Hover intent: changes the focus and schedules a redraw when it moved.
    pub(super) fn on_hover(&mut self, record: Option<usize>) {
        if self.core.model.hover_focus == record {
            return;
        }
        trace!(record = ?record, "hover focus changed");
        self.core.model.hover_focus = record;
        self.emit_plugin_event(PluginEvent::HoverChanged { record });
        self.schedule_render(InvalidationMask::hover());
    }

    /// Sets or clears the focused record by dataset index.
    pub fn set_hover_focus(&mut self, record: Option<usize>) -> ParcoordResult<()> {
        if let Some(index) = record {
            let len = self.core.model.dataset.len();
            if index >= len {
                return Err(ParcoordError::InvalidData(format!(
                    "record index {index} is outside 0..{len}"
                )));
            }
        }
        self.on_hover(record);
        Ok(())
    }

    #[must_use]
    pub fn hover_focus(&self) -> Option<usize> {
        self.core.model.hover_focus
    }

    #[must_use]
    pub fn hovered_record(&self) -> Option<&Record> {
        self.core
            .model
            .hover_focus
            .and_then(|index| self.core.model.dataset.get(index))
    }

    /// Finds the drawn polyline under plot-local `(x, y)`.
    ///
    /// Only records passing the brush are candidates. The highlighted record
    /// is tested first, then the rest from last drawn to first.
    #[must_use]
    pub fn hit_test_record(&self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let model = &self.core.model;
        let tolerance = self.core.behavior.hover_tolerance_px;
        let within = |index: usize| {
            let Some(row) = model.coordinates.row(index) else {
                return false;
            };
            let points: SmallVec<[(f64, f64); 8]> =
                row.iter().map(|point| (point.x, point.y)).collect();
            distance_to_polyline(x, y, &points).is_some_and(|distance| distance <= tolerance)
        };

        if let Some(focused) = model.highlighted_hover() {
            if within(focused) {
                return Some(focused);
            }
        }
        (0..model.dataset.len())
            .rev()
            .filter(|index| model.record_passes(*index))
            .find(|index| within(*index))
    }
}
