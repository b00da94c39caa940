pub mod brush;
pub mod color_ramp;
pub mod dimension;
pub mod projection;
pub mod record;
pub mod scale;
pub mod slot_layout;
pub mod ticks;
pub mod types;

pub use brush::{BrushRange, BrushRangeSet, BrushSelection, BrushWidget};
pub use color_ramp::{ColorDomain, DivergingColorRamp};
pub use dimension::{
    CategoricalAxis, DEFAULT_DOMAIN, Dimension, compute_dimension_scale, resolve_dimension_domain,
};
pub use projection::{CoordinateCache, DimensionId, ProjectedPoint, ProjectedRow};
pub use record::{Dataset, Record, RecordId};
pub use scale::LinearScale;
pub use slot_layout::SlotLayout;
pub use ticks::{format_compact, format_grouped, format_tick, nice_domain, ticks};
pub use types::{PlotArea, PlotMargins, Viewport};
