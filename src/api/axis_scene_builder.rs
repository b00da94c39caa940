use serde::{Deserialize, Serialize};

use crate::core::{Dimension, DimensionId, format_tick};
use crate::render::Renderer;

use super::layout_helpers::estimate_label_text_width_px;
use super::{ParallelEngine, RenderStyle};

/// One labelled tick of an axis, in plot-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Retained overlay group of one displayed dimension.
///
/// Groups are rebuilt in full whenever the order, the data or the style
/// changes; `slot` and `x` always agree with the current order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisGroup {
    pub dimension: DimensionId,
    pub slot: usize,
    pub x: f64,
    pub title: String,
    /// Half of the estimated title width; used as the label grab region.
    pub title_half_width: f64,
    pub ticks: Vec<AxisTick>,
}

/// Tolerance used to keep categorical indices that sit on a domain bound.
const DOMAIN_EPSILON: f64 = 1e-9;

pub(super) fn build_axis_group(
    dimension: &Dimension,
    id: DimensionId,
    slot: usize,
    x: f64,
    tick_count: usize,
    style: RenderStyle,
) -> AxisGroup {
    let scale = dimension.scale();
    let ticks = match dimension.categorical() {
        Some(axis) => {
            let (start, end) = scale.domain();
            let (low, high) = (start.min(end), start.max(end));
            axis.indices
                .iter()
                .zip(&axis.labels)
                .filter(|(value, _)| {
                    **value >= low - DOMAIN_EPSILON && **value <= high + DOMAIN_EPSILON
                })
                .map(|(value, label)| AxisTick {
                    value: *value,
                    y: scale.map(*value),
                    label: label.clone(),
                })
                .collect()
        }
        None => {
            let step = scale.tick_step(tick_count);
            scale
                .ticks(tick_count)
                .into_iter()
                .map(|value| AxisTick {
                    value,
                    y: scale.map(value),
                    label: format_tick(value, step),
                })
                .collect()
        }
    };

    let title = dimension.display_title().to_owned();
    let title_half_width =
        estimate_label_text_width_px(&title, style.dimension_label_font_size_px) / 2.0;
    AxisGroup {
        dimension: id,
        slot,
        x,
        title,
        title_half_width,
        ticks,
    }
}

impl<R: Renderer> ParallelEngine<R> {
    /// Drops every axis group and enters one per displayed dimension at its
    /// current slot.
    pub(super) fn rebuild_axis_groups(&mut self) {
        let style = self.core.presentation.render_style;
        let tick_count = self.core.behavior.tick_count;
        let model = &self.core.model;
        let layout = model.layout;

        let groups = model
            .order
            .iter()
            .enumerate()
            .filter_map(|(slot, id)| {
                let dimension = model.dimensions.get(id.raw())?;
                let x = layout.position(slot)?;
                Some(build_axis_group(dimension, *id, slot, x, tick_count, style))
            })
            .collect();
        self.core.model.axis_groups = groups;
    }

    #[must_use]
    pub fn axis_groups(&self) -> &[AxisGroup] {
        &self.core.model.axis_groups
    }
}
