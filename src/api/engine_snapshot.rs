use serde::{Deserialize, Serialize};

use crate::core::{BrushRange, BrushSelection, ColorDomain, PlotArea, RecordId, Viewport};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::ParallelEngine;

/// Per-dimension diagnostics in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSnapshot {
    pub name: String,
    pub title: String,
    pub slot: usize,
    pub x: f64,
    pub domain: (f64, f64),
    pub brush_selection: Option<BrushSelection>,
    pub brush_range: Option<BrushRange>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling. It describes a view; it is not used to restore one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub color_dimension: String,
    pub color_domain: ColorDomain,
    pub records_len: usize,
    pub visible_records: usize,
    pub dimensions: Vec<DimensionSnapshot>,
    pub hover_record: Option<RecordId>,
    pub interaction_mode: InteractionMode,
}

impl<R: Renderer> ParallelEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let model = &self.core.model;
        let dimensions = model
            .axis_groups
            .iter()
            .filter_map(|group| {
                let dimension = model.dimension(group.dimension)?;
                Some(DimensionSnapshot {
                    name: dimension.name().to_owned(),
                    title: group.title.clone(),
                    slot: group.slot,
                    x: group.x,
                    domain: dimension.scale().domain(),
                    brush_selection: model
                        .brush_widgets
                        .get(group.dimension.raw())
                        .and_then(|widget| widget.selection()),
                    brush_range: model.brush_ranges.get(dimension.name()),
                })
            })
            .collect();

        EngineSnapshot {
            viewport: model.viewport,
            plot_area: model.plot_area,
            color_dimension: self.core.behavior.color_dimension.clone(),
            color_domain: model.color_domain,
            records_len: model.dataset.len(),
            visible_records: self.visible_record_count(),
            dimensions,
            hover_record: self.hovered_record().map(|record| record.id().clone()),
            interaction_mode: model.interaction.mode(),
        }
    }
}
