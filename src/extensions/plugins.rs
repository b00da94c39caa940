use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub records_len: usize,
    pub dimensions_len: usize,
    /// Records passing every active brush.
    pub visible_records: usize,
    pub active_brushes: usize,
    pub hover_record: Option<usize>,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataReplaced { records_len: usize },
    BrushChanged { active_brushes: usize },
    DimensionsReordered { from_slot: usize, to_slot: usize },
    HoverChanged { record: Option<usize> },
    LabelDragStarted { slot: usize },
    LabelDragEnded { slot: usize },
    Rendered { drawn_records: usize },
}

/// Observer hook for host-side reactions (tooltips, linked views).
///
/// Plugins see events and a read-only context; they cannot mutate engine
/// state directly.
pub trait ParallelPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
