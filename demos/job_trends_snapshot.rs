#[path = "shared/mod.rs"]
mod shared;

use std::error::Error;

use parcoord_rs::api::ParallelEngine;
use parcoord_rs::core::Viewport;
use parcoord_rs::datasets::{DEFAULT_DIMENSIONS, EDUCATION_DIMENSION, job_trends_config};
use parcoord_rs::render::NullRenderer;
use parcoord_rs::telemetry::init_default_tracing;

fn main() -> Result<(), Box<dyn Error>> {
    let _ = init_default_tracing();

    let mut engine = ParallelEngine::new(
        NullRenderer::default(),
        job_trends_config(Viewport::new(1000, 550)),
        shared::sampled_dataset(42),
        DEFAULT_DIMENSIONS,
    )?;

    engine.set_brush_range(EDUCATION_DIMENSION, Some((1.5, 4.0)))?;
    let salary_slot = engine.dimension_slot("Salary")?;
    engine.move_dimension(salary_slot, 0)?;
    engine.render()?;

    let snapshot = engine.snapshot();
    println!(
        "records={} visible={} order={:?}",
        snapshot.records_len,
        snapshot.visible_records,
        engine.dimension_order()
    );
    println!("{}", snapshot.to_json_contract_v1_pretty()?);
    Ok(())
}
