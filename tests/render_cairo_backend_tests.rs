#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use parcoord_rs::ParcoordError;
use parcoord_rs::api::{ParallelEngine, ParallelEngineConfig};
use parcoord_rs::core::{Dataset, Record, Viewport};
use parcoord_rs::render::{CairoRenderer, Color};

fn dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("a", 1.0).with_value("X", 1.0).with_value("Y", 10.0),
        Record::new("b", 2.0).with_value("X", 4.0).with_value("Y", 30.0),
        Record::new("c", 3.0).with_value("X", 9.0).with_value("Y", 20.0),
    ])
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ParcoordError::InvalidData(_)));
}

#[test]
fn cairo_renderer_validates_clear_color() {
    let mut renderer = CairoRenderer::new(120, 80).expect("renderer");
    assert_eq!(renderer.backend_name(), "cairo+pango+pangocairo");
    assert!(renderer.set_clear_color(Color::rgba(0.0, 0.0, 0.0, 2.0)).is_err());
    renderer
        .set_clear_color(Color::rgb(0.9, 0.9, 0.9))
        .expect("clear color");
    assert_eq!(renderer.clear_color(), Color::rgb(0.9, 0.9, 0.9));
}

#[test]
fn cairo_renderer_draws_both_surfaces() {
    let renderer = CairoRenderer::new(900, 500).expect("renderer");
    let config = ParallelEngineConfig::new(Viewport::new(900, 500)).with_color_dimension("X");
    let mut engine =
        ParallelEngine::new(renderer, config, dataset(), ["X", "Y"]).expect("engine init");
    engine.set_hover_focus(Some(1)).expect("hover");
    engine
        .set_brush_range("Y", Some((5.0, 35.0)))
        .expect("brush");

    engine.render().expect("render");
    let stats = engine.into_renderer().last_stats();

    // Three filtered lines plus the highlighted one.
    assert_eq!(stats.polylines_drawn, 4);
    assert!(stats.lines_drawn >= 6);
    assert!(stats.rects_drawn >= 2);
    assert!(stats.texts_drawn >= 2);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let config = ParallelEngineConfig::new(Viewport::new(600, 320)).with_color_dimension("X");
    let mut engine =
        ParallelEngine::new(renderer, config, dataset(), ["X", "Y"]).expect("engine init");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .on_animation_frame_on_cairo_context(&context)
        .expect("render on context");

    assert!(!engine.has_pending_invalidation());
    assert_eq!(engine.renderer().last_stats().polylines_drawn, 3);
}
