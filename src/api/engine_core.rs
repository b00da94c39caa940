use crate::core::{
    BrushRangeSet, BrushWidget, ColorDomain, CoordinateCache, Dataset, Dimension, DimensionId,
    PlotArea, SlotLayout, Viewport,
};
use crate::extensions::ParallelPlugin;
use crate::interaction::InteractionState;

use super::{AxisGroup, RenderStyle, frame_scheduler::FrameScheduler};

/// Internal engine core state used by the public facade (`ParallelEngine`).
pub(super) struct EngineCore {
    pub(super) model: ParallelModel,
    pub(super) behavior: EngineBehavior,
    pub(super) presentation: PresentationState,
    pub(super) runtime: RuntimeState,
}

/// Data and everything derived from it.
///
/// `dimensions`, `brush_widgets` are indexed by [`DimensionId`]; `order` and
/// `axis_groups` by display slot. Derived fields are only written by
/// `rebuild_derived_state` and the brush/hover intents.
pub(super) struct ParallelModel {
    pub(super) viewport: Viewport,
    pub(super) plot_area: PlotArea,
    pub(super) dataset: Dataset,
    pub(super) dimensions: Vec<Dimension>,
    pub(super) order: Vec<DimensionId>,
    pub(super) layout: SlotLayout,
    pub(super) coordinates: CoordinateCache,
    pub(super) brush_widgets: Vec<BrushWidget>,
    pub(super) brush_ranges: BrushRangeSet,
    pub(super) color_domain: ColorDomain,
    pub(super) hover_focus: Option<usize>,
    pub(super) axis_groups: Vec<AxisGroup>,
    pub(super) interaction: InteractionState,
}

impl ParallelModel {
    #[must_use]
    pub(super) fn dimension(&self, id: DimensionId) -> Option<&Dimension> {
        self.dimensions.get(id.raw())
    }

    #[must_use]
    pub(super) fn dimension_id(&self, name: &str) -> Option<DimensionId> {
        self.dimensions
            .iter()
            .position(|dimension| dimension.name() == name)
            .map(DimensionId::new)
    }

    #[must_use]
    pub(super) fn slot_of(&self, id: DimensionId) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    /// `true` when the record at `index` exists and passes every brush.
    #[must_use]
    pub(super) fn record_passes(&self, index: usize) -> bool {
        self.dataset
            .get(index)
            .is_some_and(|record| self.brush_ranges.passes(record))
    }

    /// Hover focus that gets the highlight pass. A focused record filtered
    /// out by the brush is not drawn, but the others stay dimmed.
    #[must_use]
    pub(super) fn highlighted_hover(&self) -> Option<usize> {
        self.hover_focus.filter(|index| self.record_passes(*index))
    }
}

/// Fixed tuning values taken from the configuration.
pub(super) struct EngineBehavior {
    pub(super) color_dimension: String,
    pub(super) tick_count: usize,
    pub(super) brush_half_width_px: f64,
    pub(super) hover_tolerance_px: f64,
}

pub(super) struct PresentationState {
    pub(super) render_style: RenderStyle,
    pub(super) legend_title: String,
}

/// Runtime orchestration state grouped separately from model/presentation.
pub(super) struct RuntimeState {
    pub(super) plugins: Vec<Box<dyn ParallelPlugin>>,
    pub(super) scheduler: FrameScheduler,
}

impl RuntimeState {
    #[must_use]
    pub(super) fn with_full_invalidation() -> Self {
        Self {
            plugins: Vec::new(),
            scheduler: FrameScheduler::with_full_invalidation(),
        }
    }
}
