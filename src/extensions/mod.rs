//! Optional observer hooks live here.
//!
//! Extensions only observe engine events; they never feed state back into
//! the core paths.

pub mod plugins;

pub use plugins::{ParallelPlugin, PluginContext, PluginEvent};
