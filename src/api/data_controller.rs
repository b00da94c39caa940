use tracing::debug;

use crate::core::Dataset;
use crate::error::ParcoordResult;
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::{InvalidationMask, InvalidationTopic, ParallelEngine};

impl<R: Renderer> ParallelEngine<R> {
    /// Recomputes everything and schedules a redraw, optionally replacing
    /// the dataset first.
    ///
    /// Brushes are always reset. Replacing the data also drops the hover
    /// focus, since record indices no longer refer to the same rows.
    pub fn redraw(&mut self, dataset: Option<Dataset>) -> ParcoordResult<()> {
        self.on_data_replace(dataset)
    }

    /// Data-replacement intent.
    pub(super) fn on_data_replace(&mut self, dataset: Option<Dataset>) -> ParcoordResult<()> {
        let replaced = dataset.is_some();
        if let Some(dataset) = dataset {
            self.core.model.dataset = dataset;
            self.core.model.hover_focus = None;
        }
        for widget in &mut self.core.model.brush_widgets {
            widget.clear();
        }
        self.core.model.interaction.cancel_gesture();
        self.rebuild_derived_state()?;

        let records_len = self.core.model.dataset.len();
        debug!(records = records_len, replaced, "parallel view redrawn");
        self.emit_plugin_event(PluginEvent::DataReplaced { records_len });
        self.schedule_render(InvalidationMask::full_with_topic(InvalidationTopic::Data));
        Ok(())
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.core.model.dataset
    }
}
