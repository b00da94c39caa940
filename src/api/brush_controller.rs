use tracing::debug;

use crate::core::{BrushRangeSet, BrushSelection};
use crate::error::{ParcoordError, ParcoordResult};
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::{InvalidationMask, ParallelEngine};

impl<R: Renderer> ParallelEngine<R> {
    /// Rebuilds the whole range set from every widget, left to right.
    pub(super) fn recompute_brush_ranges(&mut self) {
        let model = &self.core.model;
        let ranges = BrushRangeSet::from_widgets(model.order.iter().filter_map(|id| {
            let dimension = model.dimensions.get(id.raw())?;
            let widget = model.brush_widgets.get(id.raw())?;
            Some((dimension.name(), dimension.scale(), widget))
        }));
        self.core.model.brush_ranges = ranges;
    }

    /// Brush intent: full range-set recompute, notification and one
    /// coalesced redraw.
    pub(super) fn on_brush(&mut self) {
        self.recompute_brush_ranges();
        let active_brushes = self.core.model.brush_ranges.len();
        debug!(active_brushes, "brush ranges recomputed");
        self.emit_plugin_event(PluginEvent::BrushChanged { active_brushes });
        self.schedule_render(InvalidationMask::brush());
    }

    /// Sets or clears the pixel selection of one brush.
    ///
    /// `y0`/`y1` are plot-local, in any order, and clamped to the plot
    /// height. A zero-height selection clears the brush.
    pub fn set_brush_selection(
        &mut self,
        dimension: &str,
        selection: Option<(f64, f64)>,
    ) -> ParcoordResult<()> {
        let id = self.resolve_dimension(dimension)?;
        if let Some((y0, y1)) = selection {
            if !y0.is_finite() || !y1.is_finite() {
                return Err(ParcoordError::InvalidData(
                    "brush selection must be finite".to_owned(),
                ));
            }
        }
        let widget = self
            .core
            .model
            .brush_widgets
            .get_mut(id.raw())
            .ok_or_else(|| ParcoordError::UnknownDimension(dimension.to_owned()))?;
        match selection {
            Some((y0, y1)) => widget.select(y0, y1),
            None => widget.clear(),
        }
        self.on_brush();
        Ok(())
    }

    /// Sets or clears one brush from an inclusive value interval on that
    /// dimension.
    ///
    /// Records are filtered against the interval exactly. The drawn selection
    /// is clamped to the axis ends.
    pub fn set_brush_range(
        &mut self,
        dimension: &str,
        range: Option<(f64, f64)>,
    ) -> ParcoordResult<()> {
        let Some((a, b)) = range else {
            return self.set_brush_selection(dimension, None);
        };
        if !a.is_finite() || !b.is_finite() {
            return Err(ParcoordError::InvalidData(
                "brush range must be finite".to_owned(),
            ));
        }
        let id = self.resolve_dimension(dimension)?;
        let model = &mut self.core.model;
        let scale = model
            .dimension(id)
            .map(|dimension| dimension.scale())
            .ok_or_else(|| ParcoordError::UnknownDimension(dimension.to_owned()))?;
        let widget = model
            .brush_widgets
            .get_mut(id.raw())
            .ok_or_else(|| ParcoordError::UnknownDimension(dimension.to_owned()))?;
        widget.select_values(a, b, scale);
        self.on_brush();
        Ok(())
    }

    /// Clears every brush selection.
    pub fn clear_brushes(&mut self) {
        for widget in &mut self.core.model.brush_widgets {
            widget.clear();
        }
        self.on_brush();
    }

    #[must_use]
    pub fn brush_ranges(&self) -> &BrushRangeSet {
        &self.core.model.brush_ranges
    }

    /// Current pixel selection of one brush, plot-local.
    pub fn brush_selection(&self, dimension: &str) -> ParcoordResult<Option<BrushSelection>> {
        let id = self.resolve_dimension(dimension)?;
        Ok(self
            .core
            .model
            .brush_widgets
            .get(id.raw())
            .and_then(|widget| widget.selection()))
    }
}
