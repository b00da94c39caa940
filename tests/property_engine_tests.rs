use parcoord_rs::api::{ParallelEngine, ParallelEngineConfig};
use parcoord_rs::core::{Dataset, LinearScale, PlotMargins, Record, SlotLayout, Viewport};
use parcoord_rs::render::{CanvasLayerKind, NullRenderer};
use proptest::prelude::*;

const DIMENSIONS: [&str; 4] = ["A", "B", "C", "D"];

fn build_engine(rows: &[(f64, f64, f64, f64)]) -> ParallelEngine<NullRenderer> {
    let dataset: Dataset = rows
        .iter()
        .enumerate()
        .map(|(index, (a, b, c, d))| {
            Record::new(index, *d)
                .with_value("A", *a)
                .with_value("B", *b)
                .with_value("C", *c)
                .with_value("D", *d)
        })
        .collect();
    let config = ParallelEngineConfig::new(Viewport::new(900, 500))
        .with_margins(PlotMargins::new(40.0, 100.0, 20.0, 40.0))
        .with_color_dimension("D");
    ParallelEngine::new(NullRenderer::default(), config, dataset, DIMENSIONS)
        .expect("engine init")
}

fn row_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (
        -1_000.0f64..1_000.0,
        0.0f64..1.0,
        -50.0f64..50.0,
        -10.0f64..10.0,
    )
}

proptest! {
    #[test]
    fn scale_invert_round_trips(
        start in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        height in 10.0f64..2_000.0,
        t in 0.0f64..1.0
    ) {
        let scale = LinearScale::vertical((start, start + span), height).expect("scale");
        let value = start + span * t;
        let pixel = scale.map(value);
        prop_assert!(pixel >= -1e-6 && pixel <= height + 1e-6);
        let back = scale.invert(pixel);
        prop_assert!((back - value).abs() <= (start.abs() + span) * 1e-9 + 1e-9);
    }

    #[test]
    fn nearest_slot_is_always_closest(
        width in 50.0f64..4_000.0,
        count in 1usize..12,
        x in -500.0f64..5_000.0
    ) {
        let layout = SlotLayout::new(width, count);
        let slot = layout.nearest_slot(x).expect("slot");
        let clamped = x.clamp(0.0, width);
        let best = (layout.position(slot).expect("position") - clamped).abs();
        for other in layout.positions() {
            prop_assert!(best <= (other - clamped).abs() + 1e-9);
        }
    }

    #[test]
    fn frame_build_is_deterministic(
        rows in prop::collection::vec(row_strategy(), 0..40),
        hover in prop::option::of(0usize..40),
        brush in prop::option::of((0.0f64..1.0, 0.0f64..1.0))
    ) {
        let mut engine = build_engine(&rows);
        if let Some(index) = hover.filter(|index| *index < rows.len()) {
            engine.set_hover_focus(Some(index)).expect("hover");
        }
        if let Some((lo, hi)) = brush {
            engine.set_brush_range("B", Some((lo, hi))).expect("brush");
        }
        let first = engine.build_render_frame().expect("first frame");
        let second = engine.build_render_frame().expect("second frame");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn visible_lines_match_brush_filter(
        rows in prop::collection::vec(row_strategy(), 1..40),
        a in (-1_000.0f64..1_000.0, -1_000.0f64..1_000.0),
        c in prop::option::of((-50.0f64..50.0, -50.0f64..50.0))
    ) {
        let mut engine = build_engine(&rows);
        engine.set_brush_range("A", Some(a)).expect("brush A");
        engine.set_brush_range("C", c).expect("brush C");

        let inside = |value: f64, (p, q): (f64, f64)| p.min(q) <= value && value <= p.max(q);
        let expected: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, (row_a, _, row_c, _))| {
                inside(*row_a, a) && c.is_none_or(|range| inside(*row_c, range))
            })
            .map(|(index, _)| index)
            .collect();
        prop_assert_eq!(engine.visible_record_indices(), expected.clone());

        let frame = engine.build_render_frame().expect("frame");
        let lines = frame.layer(CanvasLayerKind::Lines).expect("lines layer");
        prop_assert_eq!(lines.polylines.len(), expected.len());
    }

    #[test]
    fn reorder_there_and_back_is_identity(
        rows in prop::collection::vec(row_strategy(), 0..20),
        from in 0usize..4,
        to in 0usize..4
    ) {
        let mut engine = build_engine(&rows);
        let before = engine.build_render_frame().expect("frame");
        let order: Vec<String> = engine
            .dimension_order()
            .into_iter()
            .map(str::to_owned)
            .collect();

        let moved = engine.move_dimension(from, to).expect("move");
        prop_assert_eq!(moved, from != to);
        engine.move_dimension(to, from).expect("move back");

        let restored: Vec<&str> = order.iter().map(String::as_str).collect();
        prop_assert_eq!(engine.dimension_order(), restored);
        prop_assert_eq!(engine.build_render_frame().expect("frame"), before);
    }

    #[test]
    fn line_colors_ignore_display_order(
        rows in prop::collection::vec(row_strategy(), 1..20),
        from in 0usize..4,
        to in 0usize..4
    ) {
        let mut engine = build_engine(&rows);
        let colors = |engine: &ParallelEngine<NullRenderer>| {
            let frame = engine.build_render_frame().expect("frame");
            frame
                .layer(CanvasLayerKind::Lines)
                .expect("lines layer")
                .polylines
                .iter()
                .map(|line| line.color)
                .collect::<Vec<_>>()
        };
        let before = colors(&engine);
        engine.move_dimension(from, to).expect("move");
        prop_assert_eq!(colors(&engine), before);
    }
}
