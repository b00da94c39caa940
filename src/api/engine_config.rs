use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{CategoricalAxis, PlotMargins, Viewport};
use crate::error::{ParcoordError, ParcoordResult};

use super::RenderStyle;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep a view setup next to their data without an
/// ad-hoc format. The dataset and the dimension list are passed separately to
/// `ParallelEngine::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    /// Name of the dimension whose values drive line color.
    #[serde(default = "default_color_dimension")]
    pub color_dimension: String,
    /// Categorical metadata keyed by dimension name.
    #[serde(default)]
    pub categorical: IndexMap<String, CategoricalAxis>,
    #[serde(default)]
    pub style: RenderStyle,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_brush_half_width_px")]
    pub brush_half_width_px: f64,
    #[serde(default = "default_hover_tolerance_px")]
    pub hover_tolerance_px: f64,
    #[serde(default = "default_legend_title")]
    pub legend_title: String,
}

impl ParallelEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: PlotMargins::default(),
            color_dimension: default_color_dimension(),
            categorical: IndexMap::new(),
            style: RenderStyle::default(),
            tick_count: default_tick_count(),
            brush_half_width_px: default_brush_half_width_px(),
            hover_tolerance_px: default_hover_tolerance_px(),
            legend_title: default_legend_title(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_color_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.color_dimension = dimension.into();
        self
    }

    #[must_use]
    pub fn with_categorical(mut self, dimension: impl Into<String>, axis: CategoricalAxis) -> Self {
        self.categorical.insert(dimension.into(), axis);
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_brush_half_width_px(mut self, half_width: f64) -> Self {
        self.brush_half_width_px = half_width;
        self
    }

    #[must_use]
    pub fn with_hover_tolerance_px(mut self, tolerance: f64) -> Self {
        self.hover_tolerance_px = tolerance;
        self
    }

    #[must_use]
    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = title.into();
        self
    }

    /// Serializes config into pretty JSON.
    pub fn to_json_pretty(&self) -> ParcoordResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ParcoordError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ParcoordResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ParcoordError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_color_dimension() -> String {
    "JobChange".to_owned()
}

fn default_tick_count() -> usize {
    6
}

fn default_brush_half_width_px() -> f64 {
    14.0
}

fn default_hover_tolerance_px() -> f64 {
    4.0
}

fn default_legend_title() -> String {
    "Job Change".to_owned()
}
