use crate::extensions::{PluginContext, PluginEvent};
use crate::render::Renderer;

use super::ParallelEngine;

impl<R: Renderer> ParallelEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let model = &self.core.model;
        PluginContext {
            viewport: model.viewport,
            records_len: model.dataset.len(),
            dimensions_len: model.order.len(),
            visible_records: self.visible_record_count(),
            active_brushes: model.brush_ranges.len(),
            hover_record: model.hover_focus,
            interaction_mode: model.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(event, context);
        }
    }
}
