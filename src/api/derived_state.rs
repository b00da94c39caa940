use tracing::trace;

use crate::core::{ColorDomain, SlotLayout, compute_dimension_scale};
use crate::error::ParcoordResult;
use crate::render::Renderer;

use super::ParallelEngine;

impl<R: Renderer> ParallelEngine<R> {
    /// Recomputes everything derived from the dataset and the dimension
    /// order: slots, scales, color domain, coordinate cache, brush ranges and
    /// overlay axis groups.
    ///
    /// Always a full rebuild; nothing derived is patched incrementally.
    pub(super) fn rebuild_derived_state(&mut self) -> ParcoordResult<()> {
        let model = &mut self.core.model;
        let plot_height = model.plot_area.height;

        model.layout = SlotLayout::new(model.plot_area.width, model.order.len());
        for dimension in &mut model.dimensions {
            let scale = compute_dimension_scale(
                &model.dataset,
                dimension.name(),
                dimension.categorical(),
                plot_height,
            )?;
            dimension.set_scale(scale);
        }
        model.color_domain =
            ColorDomain::from_dataset(&model.dataset, &self.core.behavior.color_dimension);
        model.coordinates.rebuild(
            &model.dataset,
            &model.dimensions,
            &model.order,
            model.layout,
        );
        if model
            .hover_focus
            .is_some_and(|index| index >= model.dataset.len())
        {
            model.hover_focus = None;
        }

        self.recompute_brush_ranges();
        self.rebuild_axis_groups();

        trace!(
            rows = self.core.model.coordinates.len(),
            slots = self.core.model.layout.count(),
            "derived state rebuilt"
        );
        Ok(())
    }
}
