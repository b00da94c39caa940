mod axis_render_frame_builder;
mod axis_scene_builder;
mod brush_controller;
mod data_controller;
mod derived_state;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod frame_scheduler;
mod hover_controller;
mod invalidation;
mod json_contract;
mod layout_helpers;
mod legend_render_frame_builder;
mod line_render_frame_builder;
mod plugin_dispatch;
mod plugin_registry;
mod pointer_controller;
mod render_coordinator;
mod render_cycle_finalizer;
mod render_frame_builder;
mod render_style;
mod reorder_controller;
mod validation;

pub use axis_scene_builder::{AxisGroup, AxisTick};
pub use engine::ParallelEngine;
pub use engine_config::ParallelEngineConfig;
pub use engine_snapshot::{DimensionSnapshot, EngineSnapshot};
pub use frame_scheduler::{FrameRequester, FrameSchedulerStats};
pub use invalidation::{
    InvalidationLevel, InvalidationMask, InvalidationTopic, InvalidationTopics,
};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use render_style::RenderStyle;
