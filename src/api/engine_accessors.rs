use crate::core::{
    ColorDomain, CoordinateCache, Dimension, DimensionId, LinearScale, PlotArea, SlotLayout,
    Viewport,
};
use crate::error::{ParcoordError, ParcoordResult};
use crate::interaction::InteractionState;
use crate::render::{Color, Renderer};

use super::ParallelEngine;

impl<R: Renderer> ParallelEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.core.model.plot_area
    }

    #[must_use]
    pub fn slot_layout(&self) -> SlotLayout {
        self.core.model.layout
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.core.model.interaction
    }

    #[must_use]
    pub fn color_dimension(&self) -> &str {
        &self.core.behavior.color_dimension
    }

    /// Dimension names in display order.
    #[must_use]
    pub fn dimension_order(&self) -> Vec<&str> {
        self.core
            .model
            .order
            .iter()
            .filter_map(|id| self.core.model.dimension(*id))
            .map(Dimension::name)
            .collect()
    }

    /// Dimensions in display order.
    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.core
            .model
            .order
            .iter()
            .filter_map(|id| self.core.model.dimension(*id))
    }

    pub(super) fn resolve_dimension(&self, name: &str) -> ParcoordResult<DimensionId> {
        self.core
            .model
            .dimension_id(name)
            .ok_or_else(|| ParcoordError::UnknownDimension(name.to_owned()))
    }

    pub fn dimension_scale(&self, name: &str) -> ParcoordResult<LinearScale> {
        let id = self.resolve_dimension(name)?;
        self.core
            .model
            .dimension(id)
            .map(Dimension::scale)
            .ok_or_else(|| ParcoordError::UnknownDimension(name.to_owned()))
    }

    /// Display slot of a dimension.
    pub fn dimension_slot(&self, name: &str) -> ParcoordResult<usize> {
        let id = self.resolve_dimension(name)?;
        self.core
            .model
            .slot_of(id)
            .ok_or_else(|| ParcoordError::UnknownDimension(name.to_owned()))
    }

    /// Plot-local horizontal position of a dimension's axis.
    pub fn dimension_x(&self, name: &str) -> ParcoordResult<f64> {
        let slot = self.dimension_slot(name)?;
        self.core
            .model
            .layout
            .position(slot)
            .ok_or_else(|| ParcoordError::UnknownDimension(name.to_owned()))
    }

    #[must_use]
    pub fn coordinates(&self) -> &CoordinateCache {
        &self.core.model.coordinates
    }

    #[must_use]
    pub fn color_domain(&self) -> ColorDomain {
        self.core.model.color_domain
    }

    /// Stroke color of a record before opacity is applied.
    #[must_use]
    pub fn record_color(&self, index: usize) -> Option<Color> {
        let record = self.core.model.dataset.get(index)?;
        let color_value = record.color_value_on(&self.core.behavior.color_dimension);
        let normalized = self.core.model.color_domain.normalize(color_value);
        Some(self.core.presentation.render_style.line_color(normalized))
    }

    /// `true` when the record exists and passes every active brush.
    #[must_use]
    pub fn is_record_visible(&self, index: usize) -> bool {
        self.core.model.record_passes(index)
    }

    /// Indices of records drawn on the bitmap surface, in draw order.
    #[must_use]
    pub fn visible_record_indices(&self) -> Vec<usize> {
        (0..self.core.model.dataset.len())
            .filter(|index| self.core.model.record_passes(*index))
            .collect()
    }

    #[must_use]
    pub fn visible_record_count(&self) -> usize {
        let model = &self.core.model;
        model
            .dataset
            .records()
            .iter()
            .filter(|record| model.brush_ranges.passes(record))
            .count()
    }
}
