use tracing::debug;

use crate::core::{
    BrushRangeSet, BrushWidget, ColorDomain, CoordinateCache, Dataset, Dimension, DimensionId,
    PlotArea, SlotLayout, compute_dimension_scale,
};
use crate::error::{ParcoordError, ParcoordResult};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::validation::{
    validate_dimension_names, validate_pixel_tolerance, validate_render_style,
};
use super::{
    ParallelEngine, ParallelEngineConfig,
    engine_core::{EngineBehavior, EngineCore, ParallelModel, PresentationState, RuntimeState},
};

impl<R: Renderer> ParallelEngine<R> {
    /// Creates a fully initialized engine over `dataset`, displaying
    /// `dimensions` left to right.
    ///
    /// The bitmap and overlay surfaces share `config.viewport`; it must leave
    /// a positive plotting area after margins. Dimension names must be unique
    /// and non-empty. An empty dataset is accepted.
    pub fn new<I, S>(
        renderer: R,
        config: ParallelEngineConfig,
        dataset: Dataset,
        dimensions: I,
    ) -> ParcoordResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !config.viewport.is_valid() {
            return Err(ParcoordError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        let margins = config.margins.validate()?;
        let plot_area = PlotArea::resolve(config.viewport, margins)?;
        let render_style = validate_render_style(config.style)?;
        if config.tick_count == 0 {
            return Err(ParcoordError::InvalidData(
                "tick count must be > 0".to_owned(),
            ));
        }
        if !config.brush_half_width_px.is_finite() || config.brush_half_width_px <= 0.0 {
            return Err(ParcoordError::InvalidData(
                "brush half width must be finite and > 0".to_owned(),
            ));
        }
        let hover_tolerance_px =
            validate_pixel_tolerance("hover tolerance", config.hover_tolerance_px)?;

        let names: Vec<String> = dimensions.into_iter().map(Into::into).collect();
        validate_dimension_names(&names)?;

        let dimensions = names
            .into_iter()
            .map(|name| {
                let categorical = config.categorical.get(&name).cloned();
                let scale = compute_dimension_scale(
                    &dataset,
                    &name,
                    categorical.as_ref(),
                    plot_area.height,
                )?;
                Ok(Dimension::new(name, scale, categorical))
            })
            .collect::<ParcoordResult<Vec<_>>>()?;
        let order: Vec<DimensionId> = (0..dimensions.len()).map(DimensionId::new).collect();
        let brush_widgets = vec![
            BrushWidget::new(plot_area.height, config.brush_half_width_px);
            dimensions.len()
        ];
        let layout = SlotLayout::new(plot_area.width, order.len());

        let mut engine = Self {
            renderer,
            core: EngineCore {
                model: ParallelModel {
                    viewport: config.viewport,
                    plot_area,
                    dataset,
                    dimensions,
                    order,
                    layout,
                    coordinates: CoordinateCache::default(),
                    brush_widgets,
                    brush_ranges: BrushRangeSet::default(),
                    color_domain: ColorDomain::default(),
                    hover_focus: None,
                    axis_groups: Vec::new(),
                    interaction: InteractionState::default(),
                },
                behavior: EngineBehavior {
                    color_dimension: config.color_dimension,
                    tick_count: config.tick_count,
                    brush_half_width_px: config.brush_half_width_px,
                    hover_tolerance_px,
                },
                presentation: PresentationState {
                    render_style,
                    legend_title: config.legend_title,
                },
                runtime: RuntimeState::with_full_invalidation(),
            },
        };
        engine.rebuild_derived_state()?;

        debug!(
            records = engine.core.model.dataset.len(),
            dimensions = engine.core.model.dimensions.len(),
            plot_width = plot_area.width,
            plot_height = plot_area.height,
            "parallel engine initialized"
        );
        Ok(engine)
    }
}
