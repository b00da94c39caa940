//! parcoord-rs: interactive parallel-coordinates engine.
//!
//! The crate owns the data model, the coordinate pipeline, brushing,
//! axis reordering and hover focus, and hands a deterministic two-surface
//! frame (bitmap polylines plus a vector overlay) to a pluggable renderer.

pub mod api;
pub mod core;
pub mod datasets;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ParallelEngine, ParallelEngineConfig};
pub use error::{ParcoordError, ParcoordResult};
