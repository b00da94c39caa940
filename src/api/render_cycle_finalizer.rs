use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::ParallelEngine;

pub(super) fn finalize_render_cycle<R: Renderer>(engine: &mut ParallelEngine<R>) {
    engine.core.runtime.scheduler.finish_frame();
    let drawn_records = engine.visible_record_count();
    engine.emit_plugin_event(PluginEvent::Rendered { drawn_records });
}
