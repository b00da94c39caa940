#[path = "shared/mod.rs"]
mod shared;

use gtk4 as gtk;
use gtk4::prelude::*;
use parcoord_rs::api::ParallelEngine;
use parcoord_rs::core::Viewport;
use parcoord_rs::datasets::{DEFAULT_DIMENSIONS, job_trends_config};
use parcoord_rs::platform_gtk::GtkParallelAdapter;
use parcoord_rs::render::CairoRenderer;
use parcoord_rs::telemetry::init_default_tracing;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 550;

fn main() {
    let _ = init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.parcoord.demos.gtk_job_trends")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let renderer = match CairoRenderer::new(WIDTH as i32, HEIGHT as i32) {
        Ok(renderer) => renderer,
        Err(err) => {
            eprintln!("failed to create cairo renderer: {err}");
            return;
        }
    };
    let engine = match ParallelEngine::new(
        renderer,
        job_trends_config(Viewport::new(WIDTH, HEIGHT)),
        shared::sampled_dataset(7),
        DEFAULT_DIMENSIONS,
    ) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize job trends engine: {err}");
            return;
        }
    };

    let status = gtk::Label::new(None);
    status.set_xalign(0.0);

    let adapter = GtkParallelAdapter::new(engine);
    let engine = adapter.engine();
    let drawing_area = adapter.drawing_area().clone();
    drawing_area.set_hexpand(true);
    drawing_area.set_vexpand(true);

    let sample_button = gtk::Button::with_label("New sample");
    {
        let engine = engine.clone();
        let status = status.clone();
        let seed = std::cell::Cell::new(7_u64);
        sample_button.connect_clicked(move |_| {
            seed.set(seed.get() + 1);
            let Ok(mut chart) = engine.try_borrow_mut() else {
                return;
            };
            match chart.redraw(Some(shared::sampled_dataset(seed.get()))) {
                Ok(()) => status.set_text(&format!(
                    "sample seed {} | {} records",
                    seed.get(),
                    chart.visible_record_count()
                )),
                Err(err) => status.set_text(&format!("sample failed: {err}")),
            }
        });
    }

    let clear_button = gtk::Button::with_label("Clear brushes");
    {
        let engine = engine.clone();
        clear_button.connect_clicked(move |_| {
            if let Ok(mut chart) = engine.try_borrow_mut() {
                chart.clear_brushes();
            }
        });
    }

    let toolbar = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    toolbar.append(&sample_button);
    toolbar.append(&clear_button);
    toolbar.append(&status);

    let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
    root.append(&toolbar);
    root.append(&drawing_area);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Job trends: parallel coordinates")
        .default_width(WIDTH as i32)
        .default_height(HEIGHT as i32 + 48)
        .child(&root)
        .build();
    window.present();
}
