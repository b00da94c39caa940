use parcoord_rs::api::{ParallelEngine, ParallelEngineConfig, RenderStyle};
use parcoord_rs::core::{Dataset, DimensionId, Record, Viewport};
use parcoord_rs::render::{CanvasLayerKind, Color, NullRenderer};

fn three_records() -> Dataset {
    Dataset::new(vec![
        Record::new("r1", 5.0).with_value("A", 1.0).with_value("B", 10.0),
        Record::new("r2", -5.0).with_value("A", 2.0).with_value("B", 20.0),
        Record::new("r3", 0.0).with_value("A", 3.0).with_value("B", 30.0),
    ])
}

fn build_engine() -> ParallelEngine<NullRenderer> {
    ParallelEngine::new(
        NullRenderer::default(),
        ParallelEngineConfig::new(Viewport::new(800, 500)),
        three_records(),
        ["A", "B"],
    )
    .expect("engine init")
}

fn line_colors(engine: &ParallelEngine<NullRenderer>) -> Vec<Color> {
    engine
        .build_render_frame()
        .expect("frame")
        .layer(CanvasLayerKind::Lines)
        .expect("lines layer")
        .polylines
        .iter()
        .map(|line| line.color)
        .collect()
}

#[test]
fn basic_load_maps_color_domain_onto_ramp() {
    let engine = build_engine();
    let domain = engine.color_domain();
    assert_eq!((domain.min, domain.max, domain.mid), (-5.0, 5.0, 0.0));

    let ramp = RenderStyle::default().color_ramp;
    let opacity = RenderStyle::default().line_opacity;
    let colors = line_colors(&engine);
    assert_eq!(colors.len(), 3);
    assert_eq!(colors[0], ramp.high.with_opacity(opacity));
    assert_eq!(colors[1], ramp.low.with_opacity(opacity));
    assert_eq!(colors[2], ramp.mid.with_opacity(opacity));
}

#[test]
fn brushing_a_excludes_third_record() {
    let mut engine = build_engine();
    engine.set_brush_range("A", Some((1.0, 2.0))).expect("brush");

    assert_eq!(engine.visible_record_indices(), vec![0, 1]);
    assert_eq!(line_colors(&engine).len(), 2);
}

#[test]
fn dropping_a_on_b_swaps_the_axes() {
    let mut engine = build_engine();
    let target = engine.dimension_x("B").expect("x");
    assert!(engine.drop_dimension_at("A", target).expect("drop"));

    assert_eq!(engine.dimension_order(), vec!["B", "A"]);
    let (a, b) = (DimensionId::new(0), DimensionId::new(1));
    for index in 0..3 {
        let on_a = engine.coordinates().point(index, a).expect("point on A");
        let on_b = engine.coordinates().point(index, b).expect("point on B");
        assert!(on_a.x > on_b.x);
    }
}

#[test]
fn two_passes_make_identical_decisions() {
    let mut engine = build_engine();
    engine.set_brush_range("B", Some((15.0, 30.0))).expect("brush");
    assert_eq!(
        engine.build_render_frame().expect("first"),
        engine.build_render_frame().expect("second")
    );
}

#[test]
fn empty_dataset_uses_unit_domains() {
    let engine = ParallelEngine::new(
        NullRenderer::default(),
        ParallelEngineConfig::new(Viewport::new(800, 500)),
        Dataset::default(),
        ["A", "B"],
    )
    .expect("engine init");

    for name in ["A", "B"] {
        assert_eq!(engine.dimension_scale(name).expect("scale").domain(), (0.0, 1.0));
    }
    assert!(line_colors(&engine).is_empty());
}
