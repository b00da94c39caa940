use parcoord_rs::ParcoordError;
use parcoord_rs::api::{InvalidationLevel, InvalidationTopic, ParallelEngine, ParallelEngineConfig};
use parcoord_rs::core::{Dataset, PlotMargins, Record, Viewport};
use parcoord_rs::render::{CanvasLayerKind, NullRenderer};

const LEFT: f64 = 20.0;
const TOP: f64 = 40.0;

fn build_engine() -> ParallelEngine<NullRenderer> {
    // Plot area is 600x380 with slots at x = 100, 300, 500.
    let config = ParallelEngineConfig::new(Viewport::new(640, 440))
        .with_margins(PlotMargins::new(TOP, 20.0, 20.0, LEFT))
        .with_color_dimension("A");
    let dataset = Dataset::new(vec![
        Record::new("a", 0.0)
            .with_value("A", 0.0)
            .with_value("B", 90.0)
            .with_value("C", 0.5),
        Record::new("b", 5.0)
            .with_value("A", 5.0)
            .with_value("B", 50.0)
            .with_value("C", 0.0),
        Record::new("c", 10.0)
            .with_value("A", 10.0)
            .with_value("B", 0.0)
            .with_value("C", 1.0),
        Record::new("d", 2.0)
            .with_value("A", 2.0)
            .with_value("B", 100.0)
            .with_value("C", 0.25),
    ]);
    ParallelEngine::new(NullRenderer::default(), config, dataset, ["A", "B", "C"])
        .expect("engine init")
}

#[test]
fn move_dimension_splices_order() {
    let mut engine = build_engine();
    assert!(engine.move_dimension(0, 2).expect("move"));
    assert_eq!(engine.dimension_order(), vec!["B", "C", "A"]);
    assert_eq!(engine.dimension_slot("A").expect("slot"), 2);

    assert!(engine.move_dimension(2, 1).expect("move"));
    assert_eq!(engine.dimension_order(), vec!["B", "A", "C"]);
}

#[test]
fn moving_to_same_slot_is_a_no_op() {
    let mut engine = build_engine();
    engine.render().expect("initial render");

    assert!(!engine.move_dimension(1, 1).expect("move"));
    assert!(!engine.has_pending_invalidation());
}

#[test]
fn reorder_and_back_restores_coordinates() {
    let mut engine = build_engine();
    let before = engine.coordinates().clone();
    let frame_before = engine.build_render_frame().expect("frame");

    engine.move_dimension(0, 2).expect("move out");
    assert_ne!(engine.coordinates(), &before);
    engine.move_dimension(2, 0).expect("move back");

    assert_eq!(engine.coordinates(), &before);
    assert_eq!(engine.build_render_frame().expect("frame"), frame_before);
}

#[test]
fn reorder_moves_projected_x_with_dimension() {
    let mut engine = build_engine();
    engine.move_dimension(2, 0).expect("move");

    let row = engine.coordinates().row(1).expect("row of b");
    let xs: Vec<f64> = row.iter().map(|point| point.x).collect();
    assert_eq!(xs, vec![100.0, 300.0, 500.0]);
    // C leads now; record b has C = 0 at the bottom of the axis.
    assert_eq!(row[0].y, 380.0);
}

#[test]
fn reorder_invalidates_full_with_order_topic() {
    let mut engine = build_engine();
    engine.render().expect("initial render");

    engine.move_dimension(0, 1).expect("move");
    assert_eq!(engine.pending_invalidation_level(), InvalidationLevel::Full);
    assert!(engine.has_pending_invalidation_topic(InvalidationTopic::Order));
}

#[test]
fn brushes_follow_their_dimension_across_reorder() {
    let mut engine = build_engine();
    engine
        .set_brush_range("B", Some((40.0, 60.0)))
        .expect("brush B");
    let visible = engine.visible_record_indices();

    engine.move_dimension(1, 0).expect("move");
    assert!(engine.brush_ranges().get("B").is_some());
    assert_eq!(engine.visible_record_indices(), visible);
    assert_eq!(engine.brush_ranges().iter().next().map(|(name, _)| name), Some("B"));
}

#[test]
fn drop_dimension_at_uses_nearest_slot() {
    let mut engine = build_engine();
    assert!(engine.drop_dimension_at("A", 390.0).expect("drop"));
    assert_eq!(engine.dimension_order(), vec!["B", "A", "C"]);

    // Equidistant from slots 0 and 1: the left one wins.
    assert!(engine.drop_dimension_at("C", 200.0).expect("drop"));
    assert_eq!(engine.dimension_order(), vec!["C", "B", "A"]);
}

#[test]
fn out_of_range_move_is_rejected() {
    let mut engine = build_engine();
    let err = engine.move_dimension(0, 3).expect_err("slot 3 does not exist");
    assert!(matches!(err, ParcoordError::InvalidData(_)));
    assert_eq!(engine.dimension_order(), vec!["A", "B", "C"]);
}

#[test]
fn pointer_hover_focuses_nearest_polyline() {
    let mut engine = build_engine();
    engine.pointer_move(LEFT + 150.0, TOP + 190.0);
    assert_eq!(engine.hover_focus(), Some(1));
    assert_eq!(
        engine.hovered_record().map(|record| record.id().as_str()),
        Some("b")
    );

    engine.pointer_move(LEFT + 200.0, TOP + 300.0);
    assert_eq!(engine.hover_focus(), None);
}

#[test]
fn pointer_leave_clears_hover() {
    let mut engine = build_engine();
    engine.set_hover_focus(Some(2)).expect("focus");
    engine.pointer_leave();
    assert_eq!(engine.hover_focus(), None);
}

#[test]
fn hover_highlights_and_dims_other_lines() {
    let mut engine = build_engine();
    engine.set_hover_focus(Some(1)).expect("focus");

    let frame = engine.build_render_frame().expect("frame");
    let style = engine.render_style();
    let lines = frame.layer(CanvasLayerKind::Lines).expect("lines layer");
    assert_eq!(lines.polylines.len(), 4);
    for (index, polyline) in lines.polylines.iter().enumerate() {
        let expected = if index == 1 {
            style.line_opacity
        } else {
            style.dimmed_line_opacity
        };
        let base = engine.record_color(index).expect("color");
        assert_eq!(polyline.color, base.with_opacity(expected));
    }

    let highlight = frame
        .layer(CanvasLayerKind::Highlight)
        .expect("highlight layer");
    assert_eq!(highlight.polylines.len(), 1);
    assert_eq!(highlight.polylines[0].stroke_width, style.highlight_stroke_width);
    assert_eq!(highlight.polylines[0].points, lines.polylines[1].points);
}

#[test]
fn filtered_hover_record_still_dims_the_others() {
    let mut engine = build_engine();
    engine.set_hover_focus(Some(1)).expect("focus");
    engine
        .set_brush_range("A", Some((8.0, 10.0)))
        .expect("brush A");
    assert_eq!(engine.hover_focus(), Some(1));

    let frame = engine.build_render_frame().expect("frame");
    let highlight = frame
        .layer(CanvasLayerKind::Highlight)
        .expect("highlight layer");
    assert!(highlight.polylines.is_empty());

    let lines = frame.layer(CanvasLayerKind::Lines).expect("lines layer");
    let style = engine.render_style();
    assert_eq!(lines.polylines.len(), 1);
    assert_eq!(
        lines.polylines[0].color,
        engine
            .record_color(2)
            .expect("color")
            .with_opacity(style.dimmed_line_opacity)
    );

    engine.set_hover_focus(None).expect("clear focus");
    let frame = engine.build_render_frame().expect("frame");
    let lines = frame.layer(CanvasLayerKind::Lines).expect("lines layer");
    assert_eq!(
        lines.polylines[0].color,
        engine
            .record_color(2)
            .expect("color")
            .with_opacity(style.line_opacity)
    );
}

#[test]
fn hit_test_skips_filtered_records() {
    let mut engine = build_engine();
    engine
        .set_brush_range("A", Some((8.0, 10.0)))
        .expect("brush A");
    assert_eq!(engine.hit_test_record(150.0, 190.0), None);
}

#[test]
fn hover_focus_out_of_range_is_rejected() {
    let mut engine = build_engine();
    let err = engine
        .set_hover_focus(Some(4))
        .expect_err("index 4 does not exist");
    assert!(matches!(err, ParcoordError::InvalidData(_)));
}

#[test]
fn replacing_data_drops_hover_focus() {
    let mut engine = build_engine();
    engine.set_hover_focus(Some(3)).expect("focus");
    engine
        .redraw(Some(Dataset::new(vec![
            Record::new("z", 1.0).with_value("A", 1.0),
        ])))
        .expect("replace");
    assert_eq!(engine.hover_focus(), None);
    assert_eq!(engine.dataset().len(), 1);
}
