use tracing::debug;

use crate::error::{ParcoordError, ParcoordResult};
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::{InvalidationMask, InvalidationTopic, ParallelEngine};

impl<R: Renderer> ParallelEngine<R> {
    /// Moves the dimension displayed at `from_slot` to `to_slot`, shifting the
    /// ones in between. Returns `false` when the order is unchanged.
    pub fn move_dimension(&mut self, from_slot: usize, to_slot: usize) -> ParcoordResult<bool> {
        let count = self.core.model.order.len();
        if from_slot >= count || to_slot >= count {
            return Err(ParcoordError::InvalidData(format!(
                "slot move {from_slot} -> {to_slot} is outside 0..{count}"
            )));
        }
        self.on_reorder(from_slot, to_slot)
    }

    /// Drops `dimension` at plot-local `x`: it moves to the nearest slot.
    ///
    /// Positions outside the plot clamp to the first or last slot.
    pub fn drop_dimension_at(&mut self, dimension: &str, x: f64) -> ParcoordResult<bool> {
        let id = self.resolve_dimension(dimension)?;
        let from_slot = self
            .core
            .model
            .slot_of(id)
            .ok_or_else(|| ParcoordError::UnknownDimension(dimension.to_owned()))?;
        let Some(to_slot) = self.core.model.layout.nearest_slot(x) else {
            return Ok(false);
        };
        self.on_reorder(from_slot, to_slot)
    }

    /// Reorder intent: splice the order list, rebuild derived state, notify
    /// and schedule a full redraw.
    pub(super) fn on_reorder(&mut self, from_slot: usize, to_slot: usize) -> ParcoordResult<bool> {
        if from_slot == to_slot {
            return Ok(false);
        }
        let order = &mut self.core.model.order;
        let id = order.remove(from_slot);
        order.insert(to_slot, id);
        self.rebuild_derived_state()?;

        debug!(from_slot, to_slot, "dimensions reordered");
        self.emit_plugin_event(PluginEvent::DimensionsReordered { from_slot, to_slot });
        self.schedule_render(InvalidationMask::full_with_topic(InvalidationTopic::Order));
        Ok(true)
    }
}
